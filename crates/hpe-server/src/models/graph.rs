//! Graph DTOs - shaped for vis-network

use serde::Serialize;
use utoipa::ToSchema;

use hpe::{GraphEdge, GraphNode, Overlap, ProfileGraph};

#[derive(Debug, Serialize, ToSchema)]
pub struct GraphNodeResponse {
    pub id: i64,
    pub label: String,
    pub votes: i64,
}

/// Tags shared by the two ends of an edge
#[derive(Debug, Serialize, ToSchema)]
pub struct SharedTagsResponse {
    pub strengths: Vec<String>,
    pub aspirations: Vec<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GraphEdgeResponse {
    pub from: i64,
    pub to: i64,
    /// Number of shared tags
    pub weight: usize,
    pub shared: SharedTagsResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GraphResponse {
    pub nodes: Vec<GraphNodeResponse>,
    pub edges: Vec<GraphEdgeResponse>,
}

impl From<GraphNode> for GraphNodeResponse {
    fn from(node: GraphNode) -> Self {
        Self {
            id: node.id,
            label: node.label,
            votes: node.votes,
        }
    }
}

impl From<Overlap> for SharedTagsResponse {
    fn from(overlap: Overlap) -> Self {
        Self {
            strengths: overlap.strengths,
            aspirations: overlap.aspirations,
            values: overlap.values,
        }
    }
}

impl From<GraphEdge> for GraphEdgeResponse {
    fn from(edge: GraphEdge) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
            shared: edge.shared.into(),
        }
    }
}

impl From<ProfileGraph> for GraphResponse {
    fn from(graph: ProfileGraph) -> Self {
        Self {
            nodes: graph.nodes.into_iter().map(Into::into).collect(),
            edges: graph.edges.into_iter().map(Into::into).collect(),
        }
    }
}
