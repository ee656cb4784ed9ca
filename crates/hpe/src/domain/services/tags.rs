//! Tag parsing and display formatting

use serde_json::Value;

use crate::domain::value_objects::StoredTags;

/// Split comma-separated input into trimmed, non-empty tags
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Display a stored field, falling back to its original text.
///
/// Arrays (or strings holding a JSON array) are joined with ", ". Any other
/// string is returned unchanged, `null` becomes empty.
pub fn format_field(value: &Value) -> String {
    StoredTags::from_value(value.clone()).display()
}

/// Text of one array element: strings verbatim, anything else as JSON
pub(crate) fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
