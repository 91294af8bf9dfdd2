// ============================================================
// Layer 6 — Spreadsheet Export Writer
// ============================================================
// Serialises an AnnotatedTable into a single-sheet .xlsx
// workbook using the rust_xlsxwriter crate.
//
// Layout of the written sheet:
//
//   row 0      bold header row (original columns + user_annotation, user_notes)
//   row 1..    one row per dataset row, same order as loaded
//
// Cell kinds are preserved: text as strings, numbers as
// numbers, booleans as booleans. Empty cells stay blank.
// Excel stores numbers as f64, so integers outside ±2^53 are
// written as text to keep every digit.
//
// Reference: rust_xlsxwriter crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use crate::application::exporter::AnnotatedTable;
use crate::domain::row::Cell;
use crate::domain::traits::TableSink;

/// Writes annotation tables as .xlsx workbooks.
/// Implements the TableSink trait from Layer 3.
#[derive(Debug, Default)]
pub struct XlsxExportWriter;

impl XlsxExportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl TableSink for XlsxExportWriter {
    fn write(&self, table: &AnnotatedTable, path: &Path) -> Result<()> {
        let mut workbook = build_workbook(table)?;
        workbook
            .save(path)
            .with_context(|| format!("Cannot write annotations to '{}'", path.display()))?;

        tracing::debug!("Wrote {} rows to '{}'", table.rows.len(), path.display());
        Ok(())
    }
}

/// Largest integer magnitude an f64 holds exactly
const MAX_EXACT_INT: u64 = 1 << 53;

fn build_workbook(table: &AnnotatedTable) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet  = workbook.add_worksheet();
    let header = Format::new().set_bold();

    // ── Header row ───────────────────────────────────────────────────────────
    for (col, name) in table.headers.iter().enumerate() {
        sheet.write_string_with_format(0, column(col)?, name.as_str(), &header)?;
    }

    // ── Data rows ────────────────────────────────────────────────────────────
    for (i, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(i + 1).context("Too many rows for a worksheet")?;
        for (col, cell) in row.iter().enumerate() {
            write_cell(sheet, row_num, column(col)?, cell)?;
        }
    }

    Ok(workbook)
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Empty    => {}
        Cell::Text(s)  => { sheet.write_string(row, col, s.as_str())?; }
        Cell::Int(i) if i.unsigned_abs() > MAX_EXACT_INT => {
            sheet.write_string(row, col, i.to_string())?;
        }
        Cell::Int(i)   => { sheet.write_number(row, col, *i as f64)?; }
        Cell::Float(x) => { sheet.write_number(row, col, *x)?; }
        Cell::Bool(b)  => { sheet.write_boolean(row, col, *b)?; }
    }
    Ok(())
}

fn column(index: usize) -> Result<u16> {
    u16::try_from(index).context("Too many columns for a worksheet")
}
