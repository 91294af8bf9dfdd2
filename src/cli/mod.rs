// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// Business logic is delegated to Layer 2 (application).
//
//   1. `annotate` — interactive review on stdin/stdout
//   2. `inspect`  — print how a file's columns would be read
//
// Reference: Rust Book §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AnnotateArgs, Commands, InspectArgs};

use crate::data::loader::XlsxLoader;
use crate::domain::traits::DatasetSource;

#[derive(Parser, Debug)]
#[command(
    name = "doc-label-review",
    version,
    about = "Mark machine-generated document labels as Correct, Wrong or Unsure, then export the results."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the matching handler.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Annotate(ref args) => self.run_annotate(args),
            Commands::Inspect(ref args)  => self.run_inspect(args),
        }
    }

    /// Handles the `annotate` subcommand.
    /// Converts the args into a ReviewConfig and runs the form on stdin/stdout.
    fn run_annotate(&self, args: &AnnotateArgs) -> Result<()> {
        use crate::application::review_use_case::{ReviewConfig, ReviewUseCase};

        tracing::info!("Starting review (output: '{}')", args.output.display());

        let mut use_case = ReviewUseCase::new(ReviewConfig::from(args));
        let stdin  = std::io::stdin();
        let stdout = std::io::stdout();
        use_case.run(stdin.lock(), &mut stdout.lock())
    }

    /// Handles the `inspect` subcommand.
    /// Loads the file and prints its column mapping, as text or JSON.
    fn run_inspect(&self, args: &InspectArgs) -> Result<()> {
        let dataset = XlsxLoader::new(&args.input)
            .with_sheet(args.sheet.clone())
            .load()?;
        let summary = dataset.summary();

        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        println!("File:     {}", args.input.display());
        println!("Rows:     {}", summary.rows);
        println!("Columns:  {}", summary.headers.join(", "));
        match &summary.name_column {
            Some(name) => println!("Name:     {name}"),
            None       => println!("Name:     (row position)"),
        }
        println!("Text:     {}", summary.text_column);
        println!("Label:    {}", summary.label_column);
        Ok(())
    }
}
