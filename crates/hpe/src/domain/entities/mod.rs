//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Profile: a member record read back from the store
//! - NewProfile: a validated submission awaiting insertion

mod profile;

pub use profile::*;
