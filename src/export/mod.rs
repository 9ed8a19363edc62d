//! Tabular writers - render a flattened table as CSV or as an Excel workbook
//!
//! Both writers share the same column policy: the column set is the union of
//! keys across all rows, sorted ascending, and a row missing a column gets an
//! empty cell. Apart from framing, both formats carry identical content.

pub mod csv;
pub mod xlsx;

pub use csv::write_csv;
pub use xlsx::{write_xlsx, xlsx_bytes};

use crate::flatten::Table;
use std::collections::BTreeSet;

/// Errors produced while writing a table to an output sink.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("workbook write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Union of column keys across all rows, sorted ascending.
///
/// This is the header every writer emits, and the cell order of every data
/// row. Keys present with an empty string and keys absent from a row both
/// end up as empty cells once a writer fills against this set.
pub fn columns(table: &Table) -> Vec<String> {
    let set: BTreeSet<&str> = table
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_string).collect()
}
