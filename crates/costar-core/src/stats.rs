//! Aggregate statistics over a finished graph.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::CollaborationGraph;
use crate::types::PersonId;

pub fn total_nodes(graph: &CollaborationGraph) -> usize {
    graph.total_nodes()
}

pub fn total_edges(graph: &CollaborationGraph) -> usize {
    graph.total_edges()
}

pub fn max_degree_nodes(graph: &CollaborationGraph) -> BTreeMap<PersonId, String> {
    graph.max_degree_nodes()
}

/// A person together with how many distinct collaborators they have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPerson {
    pub id: PersonId,
    pub name: String,
    pub degree: usize,
}

/// The `k` best connected people: degree descending, then id ascending.
pub fn top_collaborators(graph: &CollaborationGraph, k: usize) -> Vec<RankedPerson> {
    let mut ranked: Vec<RankedPerson> = graph
        .degrees()
        .map(|(id, degree)| RankedPerson {
            id,
            name: graph.name(id).unwrap_or_default().to_string(),
            degree,
        })
        .collect();
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.id.cmp(&b.id)));
    ranked.truncate(k);
    ranked
}

/// The three reported statistics of a built graph, plus the maximum degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub max_degree: usize,
    pub max_degree_nodes: BTreeMap<PersonId, String>,
}

impl GraphStats {
    pub fn collect(graph: &CollaborationGraph) -> Self {
        Self {
            total_nodes: total_nodes(graph),
            total_edges: total_edges(graph),
            max_degree: graph.max_degree(),
            max_degree_nodes: max_degree_nodes(graph),
        }
    }
}
