//! Result exporters.
//!
//! Two mutually exclusive renderers, selected by configuration: a boxed
//! table on stdout and a CSV file. Both take the resolved field list for
//! column order and the downloaded rows.

pub mod csv;
pub mod screen;

/// Text form of a cell value.
///
/// Strings are used as-is; other JSON scalars keep their natural text
/// form. A field missing from a row renders as an empty cell.
pub(crate) fn value_text(value: Option<&serde_json::Value>) -> String {
    match value {
        None => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
