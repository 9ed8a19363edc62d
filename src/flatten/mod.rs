//! JSON flattening - turn nested documents into flat tables
//!
//! This module converts a parsed JSON value into an ordered sequence of rows
//! of string cells, expanding array fields into row groups and joining nested
//! field names with `/`.
//!
//! Expansion is one level deep: only arrays that are direct fields of the
//! object being expanded become row groups. Arrays nested inside array
//! elements, or inside deeper objects, contribute no columns.

pub mod row;
pub mod table;
pub mod types;

pub use row::{flatten_row, join_key};
pub use table::flatten_table;
pub use types::{render_scalar, Row, Table};
