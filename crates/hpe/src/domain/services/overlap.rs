//! Overlap graph - connects profiles sharing tags
//!
//! Edge weight is the number of distinct tags two profiles share across
//! strengths, aspirations and values. Pairs sharing nothing get no edge.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{Profile, ProfileId};
use crate::domain::value_objects::StoredTags;

/// Tags shared by two profiles, per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub strengths: Vec<String>,
    pub aspirations: Vec<String>,
    pub values: Vec<String>,
}

impl Overlap {
    pub fn between(a: &Profile, b: &Profile) -> Self {
        Self {
            strengths: shared_field(&a.strengths, &b.strengths),
            aspirations: shared_field(&a.aspirations, &b.aspirations),
            values: shared_field(&a.values, &b.values),
        }
    }

    /// Total number of shared tags across all three fields
    pub fn weight(&self) -> usize {
        self.strengths.len() + self.aspirations.len() + self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weight() == 0
    }
}

/// Graph node handed to the visualization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: ProfileId,
    pub label: String,
    pub votes: i64,
}

/// Undirected weighted edge between two profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: ProfileId,
    pub to: ProfileId,
    pub weight: usize,
    pub shared: Overlap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Distinct tags of `a` also present in `b`, in order of first appearance in `a`
pub fn shared_tags(a: &[String], b: &[String]) -> Vec<String> {
    let other: HashSet<&str> = b.iter().map(|t| t.trim()).collect();
    let mut seen = HashSet::new();

    a.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty() && other.contains(t) && seen.insert(*t))
        .map(str::to_string)
        .collect()
}

fn shared_field(a: &StoredTags, b: &StoredTags) -> Vec<String> {
    shared_tags(&a.tags(), &b.tags())
}

/// Build the node/edge list for a set of profiles
pub fn build_graph(profiles: &[Profile]) -> ProfileGraph {
    let nodes = profiles
        .iter()
        .map(|p| GraphNode {
            id: p.id,
            label: p.name.clone(),
            votes: p.votes,
        })
        .collect();

    let mut edges = Vec::new();
    for (i, a) in profiles.iter().enumerate() {
        for b in &profiles[i + 1..] {
            if a.id == b.id {
                continue;
            }
            let shared = Overlap::between(a, b);
            if shared.is_empty() {
                continue;
            }
            edges.push(GraphEdge {
                from: a.id,
                to: b.id,
                weight: shared.weight(),
                shared,
            });
        }
    }

    ProfileGraph { nodes, edges }
}
