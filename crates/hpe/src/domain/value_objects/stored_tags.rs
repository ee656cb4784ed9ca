//! StoredTags - A tag field as read back from the store

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::services::tags::{element_text, parse_tags};

/// Tag field of a stored profile.
///
/// Rows written by older clients may hold a JSON-encoded string or plain text
/// instead of an array. Anything that is not an array (or an array encoded as
/// a JSON string) is kept verbatim in `Raw` so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StoredTags {
    List(Vec<String>),
    Raw(String),
}

impl Default for StoredTags {
    fn default() -> Self {
        StoredTags::List(Vec::new())
    }
}

impl StoredTags {
    /// Best-effort decoding of a stored field; never fails
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => StoredTags::default(),
            Value::Array(items) => StoredTags::List(items.iter().map(element_text).collect()),
            Value::String(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Array(items)) => {
                    StoredTags::List(items.iter().map(element_text).collect())
                }
                _ => {
                    tracing::debug!("Stored tag field is not a JSON array, keeping raw text");
                    StoredTags::Raw(text)
                }
            },
            other => StoredTags::Raw(other.to_string()),
        }
    }

    /// Human readable form: list joined with ", ", raw text unchanged
    pub fn display(&self) -> String {
        match self {
            StoredTags::List(tags) => tags.join(", "),
            StoredTags::Raw(text) => text.clone(),
        }
    }

    /// Tags used for overlap computation
    pub fn tags(&self) -> Vec<String> {
        match self {
            StoredTags::List(tags) => tags.clone(),
            StoredTags::Raw(text) => parse_tags(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            StoredTags::List(tags) => tags.is_empty(),
            StoredTags::Raw(text) => text.trim().is_empty(),
        }
    }
}

impl<'de> Deserialize<'de> for StoredTags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(StoredTags::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_value() {
        let tags = StoredTags::from_value(json!(["empathy", "logic"]));
        assert_eq!(tags, StoredTags::List(vec!["empathy".into(), "logic".into()]));
        assert_eq!(tags.display(), "empathy, logic");
    }

    #[test]
    fn test_json_encoded_string() {
        let tags = StoredTags::from_value(json!("[\"joie\",\"respect\"]"));
        assert_eq!(tags.tags(), vec!["joie", "respect"]);
        assert_eq!(tags.display(), "joie, respect");
    }

    #[test]
    fn test_malformed_string_kept_raw() {
        let tags = StoredTags::from_value(json!("créativité; empathie"));
        assert_eq!(tags, StoredTags::Raw("créativité; empathie".into()));
        assert_eq!(tags.display(), "créativité; empathie");
    }

    #[test]
    fn test_json_non_array_string_kept_raw() {
        let tags = StoredTags::from_value(json!("{\"a\":1}"));
        assert_eq!(tags.display(), "{\"a\":1}");
    }

    #[test]
    fn test_raw_tags_are_comma_split() {
        let tags = StoredTags::Raw("a, b ,c".into());
        assert_eq!(tags.tags(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_null_and_missing_fields() {
        assert!(StoredTags::from_value(Value::Null).is_empty());

        let profile: crate::domain::Profile =
            serde_json::from_value(json!({"id": 1, "name": "Ada"})).unwrap();
        assert!(profile.values.is_empty());
        assert_eq!(profile.votes, 0);
    }

    #[test]
    fn test_serializes_untagged() {
        let list = serde_json::to_value(StoredTags::List(vec!["a".into()])).unwrap();
        assert_eq!(list, json!(["a"]));
        let raw = serde_json::to_value(StoredTags::Raw("oops".into())).unwrap();
        assert_eq!(raw, json!("oops"));
    }
}
