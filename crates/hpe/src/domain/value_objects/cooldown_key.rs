//! CooldownKey - What a cooldown entry guards

use crate::domain::entities::ProfileId;
use crate::domain::value_objects::Visitor;

/// Key of a cooldown ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooldownKey {
    /// Global submission cooldown of a visitor
    Submission(Visitor),
    /// Vote of a visitor for one profile
    Vote(Visitor, ProfileId),
}

impl std::fmt::Display for CooldownKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CooldownKey::Submission(v) => write!(f, "submission:{}", v),
            CooldownKey::Vote(v, id) => write!(f, "vote:{}:{}", v, id),
        }
    }
}
