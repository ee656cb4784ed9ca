//! HPE Data Models
//!
//! Request/response DTOs of the JSON API.
//! - Profile: members, joining and voting
//! - Graph: nodes and overlap edges for the visualization

mod graph;
mod profile;

pub use graph::*;
pub use profile::*;
