//! ProfileOrder - How to order profile listings

use serde::{Deserialize, Serialize};

/// Ordering requested from the profile store
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileOrder {
    /// Most voted first
    #[default]
    Votes,
    /// Store default (insertion order)
    Insertion,
}

impl std::fmt::Display for ProfileOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileOrder::Votes => write!(f, "votes"),
            ProfileOrder::Insertion => write!(f, "insertion"),
        }
    }
}
