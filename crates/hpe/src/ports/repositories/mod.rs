//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod cooldown_ledger;
mod profile_repository;

pub use cooldown_ledger::*;
pub use profile_repository::*;
