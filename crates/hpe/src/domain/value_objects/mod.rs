//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod cooldown_key;
mod profile_order;
mod stored_tags;
mod visitor;

pub use cooldown_key::*;
pub use profile_order::*;
pub use stored_tags::*;
pub use visitor::*;
