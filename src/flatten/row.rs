use crate::flatten::types::{render_scalar, Row};
use serde_json::{Map, Value};

/// Join a path prefix and a field name with `/`.
///
/// An empty prefix yields the field name alone, so root-level fields keep
/// their plain names. Field names containing `/` are not escaped; colliding
/// paths are an accepted limitation.
pub fn join_key(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}/{field}")
    }
}

/// Flatten one JSON value into a single row, never expanding arrays.
///
/// Objects are recursed into with the field name joined onto `prefix`;
/// array-valued fields are skipped entirely (array expansion belongs to the
/// table builder). A scalar writes one column at the current prefix. Calling
/// this with an array contributes nothing.
pub fn flatten_row(value: &Value, prefix: &str) -> Row {
    match value {
        Value::Object(fields) => flatten_fields(fields, prefix),
        Value::Array(_) => Row::new(),
        scalar => Row::from([(prefix.to_string(), render_scalar(scalar))]),
    }
}

/// Flatten an object's non-array fields under `prefix`.
pub(crate) fn flatten_fields(fields: &Map<String, Value>, prefix: &str) -> Row {
    let mut row = Row::new();
    for (name, value) in fields {
        if value.is_array() {
            continue;
        }
        row.extend(flatten_row(value, &join_key(prefix, name)));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_key_empty_prefix() {
        assert_eq!(join_key("", "id"), "id");
    }

    #[test]
    fn test_join_key_nested() {
        assert_eq!(join_key("a", "b"), "a/b");
        assert_eq!(join_key("a/b", "c"), "a/b/c");
    }

    #[test]
    fn test_scalar_uses_prefix_as_key() {
        let row = flatten_row(&json!(42), "items/count");
        assert_eq!(row, Row::from([("items/count".to_string(), "42".to_string())]));
    }

    #[test]
    fn test_nested_object() {
        let row = flatten_row(&json!({"a": 1, "c": {"d": 2}}), "");
        assert_eq!(row.get("a").map(String::as_str), Some("1"));
        assert_eq!(row.get("c/d").map(String::as_str), Some("2"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_arrays_are_skipped() {
        let row = flatten_row(&json!({"id": 1, "tags": ["x", "y"]}), "");
        assert_eq!(row.get("id").map(String::as_str), Some("1"));
        assert!(!row.contains_key("tags"));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_array_input_yields_empty_row() {
        assert!(flatten_row(&json!([1, 2, 3]), "").is_empty());
    }

    #[test]
    fn test_null_field_renders_empty_string() {
        let row = flatten_row(&json!({"a": null}), "");
        assert_eq!(row.get("a").map(String::as_str), Some(""));
    }
}
