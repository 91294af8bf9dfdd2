// ============================================================
// Layer 4 — Spreadsheet Loader
// ============================================================
// Loads the "uploaded" spreadsheet using the calamine crate.
//
// calamine reads .xlsx, .xlsm, .xls and .ods workbooks and
// hands back each worksheet as a rectangular Range<Data>:
//
//   Range<Data>
//     └── rows(): &[Data]
//           └── Data::{String, Float, Int, Bool, DateTime, Empty, ...}
//
// The first row of the sheet is the header row. Every later
// row is one document under review. Cells are converted to
// our own Cell type one-to-one; nothing is validated apart
// from the column count, which Dataset::from_table checks.
//
// Reference: calamine crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::Result;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::PathBuf;

use crate::data::dataset::{unnamed_column, Dataset};
use crate::domain::error::LoadError;
use crate::domain::row::Cell;
use crate::domain::traits::DatasetSource;

/// Loads one worksheet of a workbook on disk.
/// Implements the DatasetSource trait from Layer 3.
pub struct XlsxLoader {
    /// Path to the workbook file
    path: PathBuf,

    /// Worksheet to read; the first sheet when None
    sheet: Option<String>,
}

impl XlsxLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), sheet: None }
    }

    /// Read a named worksheet instead of the first one
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }
}

impl DatasetSource for XlsxLoader {
    fn load(&self) -> Result<Dataset> {
        let shown = self.path.display().to_string();

        let mut workbook = open_workbook_auto(&self.path).map_err(|e| LoadError::Unreadable {
            path:   shown.clone(),
            reason: e.to_string(),
        })?;

        // ── Pick the worksheet ───────────────────────────────────────────────
        let names = workbook.sheet_names();
        let sheet = match &self.sheet {
            Some(wanted) if names.iter().any(|n| n == wanted) => wanted.clone(),
            Some(wanted) => {
                return Err(LoadError::MissingSheet {
                    path:  shown,
                    sheet: wanted.clone(),
                }
                .into())
            }
            None => names
                .first()
                .cloned()
                .ok_or_else(|| LoadError::NoSheets { path: shown.clone() })?,
        };

        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| LoadError::Unreadable {
                path:   shown.clone(),
                reason: e.to_string(),
            })?;

        let dataset = dataset_from_range(&range)?;
        tracing::info!(
            "Loaded {} rows x {} columns from '{}' (sheet '{}')",
            dataset.len(),
            dataset.column_count(),
            shown,
            sheet
        );
        Ok(dataset)
    }
}

/// Turn a worksheet range into a Dataset.
/// The first row supplies the column names.
///
/// calamine starts a range at the first used cell. Columns are
/// re-anchored at column A so an empty leading column still counts
/// (as "Unnamed: 0"); leading blank rows stay skipped.
pub fn dataset_from_range(range: &Range<Data>) -> Result<Dataset, LoadError> {
    let lead = range.start().map_or(0, |(_, col)| col as usize);
    let anchored = |row: &[Data]| -> Vec<Cell> {
        std::iter::repeat(Cell::Empty)
            .take(lead)
            .chain(row.iter().map(cell_from_data))
            .collect()
    };

    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|header| {
            anchored(header)
                .into_iter()
                .enumerate()
                .map(|(i, cell)| header_name(i, cell))
                .collect()
        })
        .unwrap_or_default();

    let body: Vec<Vec<Cell>> = rows.map(anchored).collect();

    Dataset::from_table(headers, body)
}

/// Blank header cells get a positional placeholder name
fn header_name(index: usize, cell: Cell) -> String {
    match cell {
        Cell::Empty => unnamed_column(index),
        cell => cell.to_string(),
    }
}

/// One calamine cell → one Cell, without interpretation.
/// Dates keep their serial number; error cells keep their text (e.g. "#DIV/0!").
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty          => Cell::Empty,
        Data::String(s)      => Cell::Text(s.clone()),
        Data::Int(i)         => Cell::Int(*i),
        Data::Float(f)       => Cell::Float(*f),
        Data::Bool(b)        => Cell::Bool(*b),
        Data::DateTime(dt)   => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e)       => Cell::Text(e.to_string()),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::RowShape;

    fn range_of(rows: &[&[Data]]) -> Range<Data> {
        let height = rows.len() as u32;
        let width  = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), value.clone());
            }
        }
        range
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_header_row_becomes_column_names() {
        let range = range_of(&[
            &[s("name"), s("text"), s("label")],
            &[s("doc1"), s("a"),    s("X")],
        ]);
        let ds = dataset_from_range(&range).unwrap();
        assert_eq!(ds.headers(), &["name", "text", "label"]);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.shape(), RowShape::WithName);
    }

    #[test]
    fn test_blank_header_gets_placeholder() {
        let range = range_of(&[
            &[Data::Empty, s("label")],
            &[s("body"),   s("L")],
        ]);
        let ds = dataset_from_range(&range).unwrap();
        assert_eq!(ds.headers()[0], "Unnamed: 0");
    }

    #[test]
    fn test_leading_empty_column_is_kept() {
        // Data starts at B1: calamine's range begins at column 1
        let mut range = Range::new((0, 1), (1, 3));
        for (c, v) in ["name", "text", "label"].iter().enumerate() {
            range.set_value((0, c as u32 + 1), s(v));
        }
        for (c, v) in ["doc1", "a", "X"].iter().enumerate() {
            range.set_value((1, c as u32 + 1), s(v));
        }

        let ds = dataset_from_range(&range).unwrap();
        assert_eq!(ds.headers(), &["Unnamed: 0", "name", "text", "label"]);
        // Four columns: the first two are (text, label)
        assert_eq!(ds.shape(), RowShape::WithoutName);
        assert_eq!(ds.row(0).unwrap(), &[Cell::Empty, s_cell("doc1"), s_cell("a"), s_cell("X")]);
    }

    fn s_cell(v: &str) -> Cell {
        Cell::text(v)
    }

    #[test]
    fn test_single_column_rejected() {
        let range = range_of(&[&[s("text")], &[s("a")]]);
        let err = dataset_from_range(&range).unwrap_err();
        assert!(matches!(err, LoadError::TooFewColumns { found: 1 }));
    }

    #[test]
    fn test_empty_sheet_rejected() {
        let range: Range<Data> = Range::empty();
        assert!(dataset_from_range(&range).is_err());
    }

    #[test]
    fn test_cell_kinds_pass_through() {
        let range = range_of(&[
            &[s("text"),          s("label")],
            &[Data::Float(3.25),  Data::Bool(false)],
            &[Data::Int(9),       Data::Empty],
        ]);
        let ds = dataset_from_range(&range).unwrap();
        assert_eq!(ds.row(0).unwrap(), &[Cell::Float(3.25), Cell::Bool(false)]);
        assert_eq!(ds.row(1).unwrap(), &[Cell::Int(9), Cell::Empty]);
    }

    #[test]
    fn test_loads_workbook_from_disk() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "text").unwrap();
        sheet.write_string(0, 1, "label").unwrap();
        sheet.write_string(1, 0, "the cat sat").unwrap();
        sheet.write_string(1, 1, "animals").unwrap();
        workbook.save(&path).unwrap();

        let ds = XlsxLoader::new(&path).load().unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.display_row(0).unwrap().text, Cell::text("the cat sat"));
    }

    #[test]
    fn test_missing_sheet_is_load_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.add_worksheet().write_string(0, 0, "text").unwrap();
        workbook.save(&path).unwrap();

        let err = XlsxLoader::new(&path)
            .with_sheet(Some("Nope".to_string()))
            .load()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingSheet { .. })
        ));
    }

    #[test]
    fn test_unreadable_file_is_load_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let err = XlsxLoader::new(&path).load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::Unreadable { .. })
        ));
    }
}
