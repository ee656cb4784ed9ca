//! Profile - A member of the exchange
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::services::tags::parse_tags;
use crate::domain::value_objects::StoredTags;

/// Identifier assigned by the remote store
pub type ProfileId = i64;

/// Profile - A member record as read back from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    #[serde(default)]
    pub strengths: StoredTags,
    #[serde(default)]
    pub aspirations: StoredTags,
    #[serde(default)]
    pub values: StoredTags,
    /// Vote counter, incremented atomically by the store
    #[serde(default)]
    pub votes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// NewProfile - A validated submission awaiting insertion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProfile {
    pub name: String,
    pub strengths: Vec<String>,
    pub aspirations: Vec<String>,
    pub values: Vec<String>,
}

impl NewProfile {
    pub const MAX_NAME_CHARS: usize = 80;
    pub const MAX_TAG_CHARS: usize = 40;
    pub const MAX_TAGS: usize = 20;

    /// Validate and normalize a submission
    pub fn new(
        name: impl AsRef<str>,
        strengths: Vec<String>,
        aspirations: Vec<String>,
        values: Vec<String>,
    ) -> Result<Self, DomainError> {
        let name = name.as_ref().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if name.chars().count() > Self::MAX_NAME_CHARS {
            return Err(DomainError::validation(format!(
                "name must be at most {} characters",
                Self::MAX_NAME_CHARS
            )));
        }

        Ok(Self {
            name,
            strengths: check_tags("strengths", strengths)?,
            aspirations: check_tags("aspirations", aspirations)?,
            values: check_tags("values", values)?,
        })
    }

    /// Build a submission from the raw comma-separated form fields
    pub fn from_form(
        name: &str,
        strengths: &str,
        aspirations: &str,
        values: &str,
    ) -> Result<Self, DomainError> {
        Self::new(
            name,
            parse_tags(strengths),
            parse_tags(aspirations),
            parse_tags(values),
        )
    }
}

fn check_tags(field: &str, tags: Vec<String>) -> Result<Vec<String>, DomainError> {
    let tags: Vec<String> = tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if tags.len() > NewProfile::MAX_TAGS {
        return Err(DomainError::validation(format!(
            "{field}: at most {} entries allowed",
            NewProfile::MAX_TAGS
        )));
    }
    if let Some(tag) = tags
        .iter()
        .find(|t| t.chars().count() > NewProfile::MAX_TAG_CHARS)
    {
        return Err(DomainError::validation(format!(
            "{field}: '{tag}' exceeds {} characters",
            NewProfile::MAX_TAG_CHARS
        )));
    }

    Ok(tags)
}
