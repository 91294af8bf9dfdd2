// ============================================================
// Layer 2 — Exporter
// ============================================================
// Builds the downloadable table from a dataset and the
// judgments collected so far:
//
//   original columns ... | user_annotation | user_notes
//
// Every dataset row is kept, in its original order. The
// first `annotations.len()` rows carry their judgment and
// note; rows past the cursor have those two cells empty.
// If the input already had those columns, they are reused.
//
// The exporter only reads the session. Writing the table to
// a file is the TableSink's job (Layer 6).

use anyhow::Result;
use std::path::Path;

use crate::application::session::AnnotationSession;
use crate::data::dataset::Dataset;
use crate::domain::{
    error::SessionError,
    judgment::Judgment,
    row::Cell,
    traits::TableSink,
};

pub const ANNOTATION_COLUMN: &str = "user_annotation";
pub const NOTES_COLUMN: &str = "user_notes";
pub const DEFAULT_EXPORT_FILE: &str = "annotations.xlsx";

/// A header row plus rows of cells, ready to be serialised.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedTable {
    pub headers: Vec<String>,
    pub rows:    Vec<Vec<Cell>>,
}

impl AnnotatedTable {
    /// Join a dataset with parallel judgment/note sequences.
    ///
    /// A dataset that already has `user_annotation` / `user_notes`
    /// columns (a previous export being reviewed again) gets those
    /// columns overwritten in place; otherwise both are appended.
    pub fn build(dataset: &Dataset, annotations: &[Judgment], notes: &[String]) -> Self {
        debug_assert_eq!(annotations.len(), notes.len());

        let mut headers = dataset.headers().to_vec();
        let annotation_col = column_slot(&mut headers, ANNOTATION_COLUMN);
        let notes_col      = column_slot(&mut headers, NOTES_COLUMN);

        let rows = dataset
            .rows()
            .iter()
            .enumerate()
            .map(|(i, original)| {
                let mut row = original.clone();
                row.resize(headers.len(), Cell::Empty);
                row[annotation_col] = annotations.get(i).map_or(Cell::Empty, |j| Cell::text(j.as_str()));
                row[notes_col]      = notes.get(i).map_or(Cell::Empty, |n| Cell::text(n.as_str()));
                row
            })
            .collect();

        Self { headers, rows }
    }
}

/// Index of the column called `name`, appending it when missing
fn column_slot(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(index) => index,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}

/// Snapshot the session into an exportable table.
/// Refused until at least one judgment exists.
pub fn export(session: &AnnotationSession) -> Result<AnnotatedTable, SessionError> {
    let dataset = session.dataset().ok_or(SessionError::NoDataset)?;
    if !session.can_export() {
        return Err(SessionError::NothingToExport);
    }
    Ok(AnnotatedTable::build(dataset, session.annotations(), session.notes()))
}

/// Export the session and hand the table to `sink`.
/// Returns the number of annotated rows written.
pub fn export_to(session: &AnnotationSession, sink: &dyn TableSink, path: &Path) -> Result<usize> {
    let table = export(session)?;
    sink.write(&table, path)?;

    tracing::info!(
        "Exported {} annotations ({} rows) to '{}'",
        session.annotations().len(),
        table.rows.len(),
        path.display()
    );
    Ok(session.annotations().len())
}
