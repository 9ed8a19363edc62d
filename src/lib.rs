//! # Flatsheet - JSON to CSV/Excel conversion
//!
//! A library for flattening nested JSON documents into flat tables of string
//! cells and exporting them as delimited text or spreadsheet workbooks.
//!
//! ## Modules
//!
//! - **flatten**: turn one JSON document into an ordered table of rows
//! - **export**: render a table as CSV or as an xlsx workbook
//!
//! ## Quick Start
//!
//! ```rust
//! use flatsheet::{flatten_table, write_csv};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let doc = json!({
//!     "header": "X",
//!     "items": [
//!         {"a": 1},
//!         {"a": 2}
//!     ]
//! });
//!
//! let table = flatten_table(&doc);
//! let mut out = Vec::new();
//! write_csv(&table, &mut out)?;
//!
//! assert_eq!(String::from_utf8(out)?, "header,items/a\nX,1\nX,2\n");
//! # Ok(())
//! # }
//! ```
//!
//! Array fields of the top-level object are expanded in parallel by index,
//! one row per index up to the longest array; everything else flattens into
//! `/`-joined column keys. The flattening itself never fails - only reading,
//! parsing, and writing can.

use anyhow::{Context, Result};
use serde_json::Value;

pub mod export;
pub mod flatten;

// Re-export commonly used items for convenience
pub use export::{columns, write_csv, write_xlsx, xlsx_bytes, ExportError};
pub use flatten::{flatten_row, flatten_table, join_key, render_scalar, Row, Table};

/// Parse one JSON document from raw bytes.
///
/// Tries SIMD-accelerated parsing first and falls back to serde_json. The
/// fallback re-parses the original slice because simd-json mutates its input
/// buffer in place.
pub fn parse_document(bytes: &[u8]) -> Result<Value> {
    let mut buf = bytes.to_vec();
    match simd_json::serde::from_slice::<Value>(&mut buf) {
        Ok(value) => Ok(value),
        Err(_) => serde_json::from_slice(bytes).context("failed to parse JSON document"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_parse_document() {
        let value = parse_document(br#"{"id": 1, "name": "Alice"}"#).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "Alice"}));
    }

    #[test]
    fn test_parse_document_rejects_invalid_json() {
        assert!(parse_document(b"{not json").is_err());
    }

    #[test]
    fn test_file_to_csv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("order.json");
        std::fs::write(
            &input,
            br#"{"order": 7, "lines": [{"sku": "a"}, {"sku": "b"}]}"#,
        )
        .unwrap();

        let bytes = std::fs::read(&input).unwrap();
        let table = flatten_table(&parse_document(&bytes).unwrap());

        let output = dir.path().join("order.csv");
        let mut file = std::fs::File::create(&output).unwrap();
        write_csv(&table, &mut file).unwrap();
        file.flush().unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "lines/sku,order\na,7\nb,7\n");
    }
}
