// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Two error classes exist in this system:
//
//   LoadError    — a file could not become a Dataset.
//                  Nothing is installed; the session keeps
//                  whatever state it had before.
//
//   SessionError — an action was attempted in a state where
//                  the form would have it disabled. The
//                  session is left untouched.
//
// Neither is fatal. The front end prints the message and
// waits for the next action.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The file must have at least 2 columns (found {found}).")]
    TooFewColumns { found: usize },

    #[error("cannot open workbook '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    #[error("workbook '{path}' has no sheet named '{sheet}'")]
    MissingSheet { path: String, sheet: String },

    #[error("workbook '{path}' contains no sheets")]
    NoSheets { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no file is loaded; open a spreadsheet first")]
    NoDataset,

    #[error("all documents have already been annotated")]
    Complete,

    #[error("nothing has been annotated yet")]
    NothingToExport,
}
