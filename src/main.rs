mod cli;
mod application;
mod domain;
mod data;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    infra::logging::init();

    let cli = Cli::parse();
    cli.run()
}
