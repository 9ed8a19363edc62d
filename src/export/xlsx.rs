use crate::export::{columns, ExportError};
use crate::flatten::Table;
use rust_xlsxwriter::Workbook;
use std::io::Write;

/// Serialize a table as an xlsx workbook with a single sheet: row 1 is the
/// sorted header, rows 2..n+1 the data, columns positioned by sorted index.
/// Cell content matches the CSV writer column for column.
///
/// An empty table produces a valid workbook with one empty sheet and no
/// header row.
pub fn xlsx_bytes(table: &Table) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if !table.is_empty() {
        let cols = columns(table);
        for (col_idx, name) in cols.iter().enumerate() {
            worksheet.write_string(0, col_idx as u16, name)?;
        }
        for (row_idx, row) in table.iter().enumerate() {
            for (col_idx, name) in cols.iter().enumerate() {
                let cell = row.get(name).map(String::as_str).unwrap_or("");
                worksheet.write_string(row_idx as u32 + 1, col_idx as u16, cell)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Write a table as an xlsx workbook to any byte sink.
pub fn write_xlsx<W: Write>(table: &Table, mut writer: W) -> Result<(), ExportError> {
    let buf = xlsx_bytes(table)?;
    writer.write_all(&buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::Row;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_workbook_bytes_are_a_zip() {
        let table = vec![row(&[("a", "1"), ("b", "x")])];
        let buf = xlsx_bytes(&table).unwrap();
        // xlsx is a zip container
        assert!(buf.starts_with(b"PK"));
    }

    #[test]
    fn test_empty_table_still_yields_valid_workbook() {
        let buf = xlsx_bytes(&Vec::new()).unwrap();
        assert!(buf.starts_with(b"PK"));
    }

    #[test]
    fn test_write_xlsx_to_sink() {
        let table = vec![row(&[("a", "1")]), row(&[("a", "2"), ("b", "y")])];
        let mut buf = Vec::new();
        write_xlsx(&table, &mut buf).unwrap();
        assert!(!buf.is_empty());
    }
}
