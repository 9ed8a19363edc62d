use crate::flatten::row::{flatten_fields, flatten_row, join_key};
use crate::flatten::types::{render_scalar, Row, Table};
use serde_json::{Map, Value};

/// Flatten one JSON document into an ordered table of rows.
///
/// - An array root produces one row per element, each flattened as an
///   independent record. Arrays nested inside an element are dropped from
///   that row; expansion does not recurse.
/// - An object root runs array expansion: its immediate array fields become
///   parallel row groups.
/// - Any other value produces a single row with the empty string as its only
///   column key.
///
/// This function is total: it never fails for any JSON value.
pub fn flatten_table(value: &Value) -> Table {
    match value {
        Value::Array(elements) => elements.iter().map(|elem| flatten_row(elem, "")).collect(),
        Value::Object(fields) => flatten_object(fields, ""),
        scalar => vec![Row::from([(String::new(), render_scalar(scalar))])],
    }
}

/// Expand an object's immediate array fields into rows.
///
/// Array fields are detected at this level only and processed in sorted name
/// order, so output is deterministic no matter how the map iterates. The
/// non-array fields flatten into a base row shared by every emitted row.
///
/// With no array fields the base row is the whole result. If every array
/// field is empty, one row carries the base fields plus an empty-string cell
/// per array field, marking "present but nothing to expand". Otherwise the
/// arrays expand in parallel by index up to the longest one; a row past the
/// end of a shorter array simply lacks that field's columns rather than
/// carrying empty strings.
fn flatten_object(fields: &Map<String, Value>, prefix: &str) -> Table {
    let mut array_fields: Vec<(&String, &Vec<Value>)> = fields
        .iter()
        .filter_map(|(name, value)| value.as_array().map(|elements| (name, elements)))
        .collect();
    array_fields.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let base = flatten_fields(fields, prefix);

    if array_fields.is_empty() {
        return vec![base];
    }

    // array_fields is non-empty past the early return above
    let max_len = array_fields
        .iter()
        .map(|(_, elements)| elements.len())
        .max()
        .expect("non-empty array_fields");

    if max_len == 0 {
        let mut row = base;
        for (name, _) in &array_fields {
            row.insert(join_key(prefix, name), String::new());
        }
        return vec![row];
    }

    let mut rows = Table::with_capacity(max_len);
    for i in 0..max_len {
        let mut row = base.clone();
        for (name, elements) in &array_fields {
            if let Some(element) = elements.get(i) {
                row.extend(flatten_row(element, &join_key(prefix, name)));
            }
        }
        rows.push(row);
    }
    rows
}
