// ============================================================
// Layer 4 — Data
// ============================================================
// Everything between a workbook on disk and an in-memory
// Dataset:
//
//   workbook file (.xlsx / .xls / .ods)
//       │
//       ▼
//   XlsxLoader      → opens the workbook, picks a sheet
//       │
//       ▼
//   Dataset         → header row + data rows, column count checked
//
// Reference: calamine crate documentation

/// Reads a worksheet with calamine
pub mod loader;

/// The immutable table under review
pub mod dataset;
