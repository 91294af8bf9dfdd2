// ============================================================
// Layer 4 — Dataset
// ============================================================
// The loaded table under review: one header row plus an
// ordered list of data rows. Immutable once constructed.
//
// Construction is the only place the column count is checked.
// Everything else about the cells is passed through untouched.

use serde::Serialize;

use crate::domain::{
    error::LoadError,
    row::{Cell, RowShape, RowView},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows:    Vec<Vec<Cell>>,
    shape:   RowShape,
}

impl Dataset {
    /// Build a dataset from a header row and data rows.
    ///
    /// The table is as wide as its widest row: when a row has more
    /// cells than there are headers, the extra columns are named
    /// `Unnamed: <index>`. Shorter rows are padded with empty cells.
    /// Fails with `LoadError::TooFewColumns` when fewer than two
    /// columns are present.
    pub fn from_table(mut headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, LoadError> {
        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        for index in headers.len()..widest {
            headers.push(unnamed_column(index));
        }

        let width = headers.len();
        if width < 2 {
            return Err(LoadError::TooFewColumns { found: width });
        }

        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();

        let shape = RowShape::for_columns(width);
        tracing::debug!("Dataset: {} rows, {} columns, shape {:?}", rows.len(), width, shape);

        Ok(Self { headers, rows, shape })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn shape(&self) -> RowShape {
        self.shape
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// The name, text and label of one row, as the form displays them.
    pub fn display_row(&self, index: usize) -> Option<RowView> {
        let row = self.row(index)?;
        let (text_col, label_col) = (self.shape.text_column(), self.shape.label_column());

        let name = match self.shape {
            RowShape::WithName    => row[0].to_string(),
            RowShape::WithoutName => index.to_string(),
        };

        Some(RowView {
            index,
            total:        self.len(),
            name,
            text_header:  self.headers[text_col].clone(),
            text:         row[text_col].clone(),
            label_header: self.headers[label_col].clone(),
            label:        row[label_col].clone(),
        })
    }

    /// A serialisable description of the column mapping.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            rows:         self.len(),
            columns:      self.column_count(),
            shape:        self.shape,
            headers:      self.headers.clone(),
            name_column:  (self.shape == RowShape::WithName).then(|| self.headers[0].clone()),
            text_column:  self.headers[self.shape.text_column()].clone(),
            label_column: self.headers[self.shape.label_column()].clone(),
        }
    }
}

/// Placeholder name for a column without a header
pub fn unnamed_column(index: usize) -> String {
    format!("Unnamed: {index}")
}

/// What `inspect` prints about a loaded file.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub rows:         usize,
    pub columns:      usize,
    pub shape:        RowShape,
    pub headers:      Vec<String>,
    pub name_column:  Option<String>,
    pub text_column:  String,
    pub label_column: String,
}
