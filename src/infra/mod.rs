// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concerns that sit outside the review workflow itself:
//
//   export_writer.rs — Writing the annotated table to an
//                      .xlsx workbook with rust_xlsxwriter.
//                      Implements the TableSink trait so the
//                      exporter never sees the library types.
//
//   logging.rs       — tracing-subscriber setup shared by
//                      every command.
//
// Reference: Rust Book §7 (Modules)

/// .xlsx writer for exported annotations
pub mod export_writer;

/// tracing subscriber initialisation
pub mod logging;
