// ============================================================
// Layer 3 — Cell, RowShape and RowView
// ============================================================
// A spreadsheet row is a list of cells. We do not interpret
// cell contents beyond what is needed to show them and write
// them back out again — malformed values pass through as-is.
//
// The row shape is decided once per dataset from its column
// count:
//
//   3 columns        → WithName    (name, text, label)
//   any other count  → WithoutName (text, label, ...extra)
//
// A WithoutName row has no name of its own; the form shows
// the row's zero-based position instead.
//
// Reference: Rust Book §6 (Enums), §8 (Collections)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single spreadsheet value, kept close to what the source file held.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty    => Ok(()),
            Cell::Text(s)  => f.write_str(s),
            Cell::Int(i)   => write!(f, "{i}"),
            Cell::Float(x) => write!(f, "{x}"),
            Cell::Bool(b)  => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// How the columns of a dataset map onto (name, text, label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowShape {
    /// Exactly three columns: name, text, label
    WithName,
    /// Two (or more than three) columns: the first two are text, label
    WithoutName,
}

impl RowShape {
    /// Resolve the shape from a column count.
    /// Callers must already have rejected counts below 2.
    pub fn for_columns(count: usize) -> Self {
        if count == 3 {
            RowShape::WithName
        } else {
            RowShape::WithoutName
        }
    }

    /// Column index holding the document text
    pub fn text_column(self) -> usize {
        match self {
            RowShape::WithName    => 1,
            RowShape::WithoutName => 0,
        }
    }

    /// Column index holding the machine-generated label
    pub fn label_column(self) -> usize {
        self.text_column() + 1
    }
}

/// Everything the form needs to show about the row under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Zero-based row position
    pub index: usize,
    /// Total number of rows in the dataset
    pub total: usize,
    /// The name column value, or the position for unnamed rows
    pub name: String,
    pub text_header: String,
    pub text: Cell,
    pub label_header: String,
    pub label: Cell,
}
