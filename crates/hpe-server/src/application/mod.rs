//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the profile store and the cooldown ledger.

mod profile_service;

pub use profile_service::ProfileService;
