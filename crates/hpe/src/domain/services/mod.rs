//! Domain Services
//!
//! Stateless domain logic shared by the application layer.

pub mod cooldown;
pub mod overlap;
pub mod tags;

pub use cooldown::CooldownPolicy;
pub use overlap::{build_graph, shared_tags, GraphEdge, GraphNode, Overlap, ProfileGraph};
pub use tags::{format_field, parse_tags};
