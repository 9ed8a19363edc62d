use serde_json::Value;
use std::collections::BTreeMap;

/// A single output row: column key mapped to cell text.
///
/// Rows produced from the same table do not all carry the same key set - a
/// row expanded from a shorter parallel array simply lacks that array's keys.
/// A key present with an empty string is distinct from an absent key; both
/// render as an empty cell only once a writer unions the columns.
///
/// A `BTreeMap` keeps key iteration sorted, so equal inputs always produce
/// byte-identical rows regardless of the order fields arrived in.
pub type Row = BTreeMap<String, String>;

/// An ordered sequence of rows. Order follows document and array order and
/// is preserved through export.
pub type Table = Vec<Row>;

/// Render a scalar JSON value as cell text.
///
/// - `null` becomes the empty string
/// - booleans become `"true"` / `"false"`
/// - numbers use `serde_json::Number`'s display: exact for integers that fit
///   i64/u64; floats use Rust's shortest round-trip form, so data parsed
///   generically as floating point may show precision artifacts
/// - strings are taken verbatim
///
/// Composite values never reach this function through the flattener; the
/// fallback renders them as compact JSON so the function stays total.
pub fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
