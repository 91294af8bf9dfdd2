// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `annotate` and `inspect`,
// and their flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::review_use_case::ReviewConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review document labels interactively and export the judgments
    Annotate(AnnotateArgs),

    /// Show how a spreadsheet's columns would be read, without reviewing
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Spreadsheet to open at startup (.xlsx, .xls, .ods).
    /// Can also be opened later with `o <path>`.
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Where `s` saves the annotations
    #[arg(long, short, default_value = "annotations.xlsx")]
    pub output: PathBuf,
}

/// Boundary between Layer 1 and Layer 2:
/// the application layer never sees clap types.
impl From<&AnnotateArgs> for ReviewConfig {
    fn from(a: &AnnotateArgs) -> Self {
        ReviewConfig {
            input:  a.input.clone(),
            sheet:  a.sheet.clone(),
            output: a.output.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Spreadsheet to inspect
    #[arg(long, short)]
    pub input: PathBuf,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}
