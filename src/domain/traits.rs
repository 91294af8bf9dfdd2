// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The session never touches the filesystem. Reading a
// spreadsheet and writing one back out sit behind these two
// traits so the application layer only depends on the
// abstractions:
//
//   XlsxLoader       implements DatasetSource
//   XlsxExportWriter implements TableSink
//
// Tests swap in in-memory implementations of either side.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

use crate::application::exporter::AnnotatedTable;
use crate::data::dataset::Dataset;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce a Dataset ("the uploaded file").
pub trait DatasetSource {
    /// Load and validate the dataset.
    /// A rejected file returns an error and produces no Dataset.
    fn load(&self) -> Result<Dataset>;
}

// ─── TableSink ────────────────────────────────────────────────────────────────
/// Any component that can persist an exported annotation table.
pub trait TableSink {
    /// Write the table to `path`, replacing any existing file.
    fn write(&self, table: &AnnotatedTable, path: &Path) -> Result<()>;
}
