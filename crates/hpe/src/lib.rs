//! Human Potential Exchange Domain Library
//!
//! Core domain types and interfaces for the HPE community page.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Profile, NewProfile)
//!   - `value_objects/`: Immutable value types (StoredTags, Visitor, CooldownKey, ProfileOrder)
//!   - `services/`: Tag parsing, overlap graph, cooldown policy
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Remote profile store and cooldown ledger
//!
//! # Usage
//!
//! ```rust,ignore
//! use hpe::domain::{NewProfile, Profile};
//! use hpe::ports::{CooldownLedger, ProfileRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::services::{
    build_graph, format_field, parse_tags, shared_tags, CooldownPolicy, GraphEdge, GraphNode,
    Overlap, ProfileGraph,
};
pub use domain::{
    CooldownKey, DomainError, NewProfile, Profile, ProfileId, ProfileOrder, StoredTags, Visitor,
};
pub use ports::{CooldownLedger, ProfileRepository};
