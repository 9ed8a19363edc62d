use crate::export::{columns, ExportError};
use crate::flatten::Table;
use std::io::Write;

/// Write a table as CSV: a sorted header row, then one record per row with
/// empty cells where a row lacks a column. Quoting and escaping follow the
/// `csv` crate's defaults (RFC 4180 style).
///
/// An empty table writes nothing at all - no header, no bytes.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<(), ExportError> {
    if table.is_empty() {
        return Ok(());
    }

    let cols = columns(table);
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(&cols)?;
    for row in table {
        let record: Vec<&str> = cols
            .iter()
            .map(|col| row.get(col).map(String::as_str).unwrap_or(""))
            .collect();
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}
