//! The collaboration graph: people as nodes, shared movies as edges.
//!
//! Edges are undirected and deduplicated by their canonical key. Each edge
//! keeps only the title and date of the most recent movie that produced it;
//! earlier movies are discarded, not queued.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::trace;

use crate::date::{ReleaseDate, is_after};
use crate::types::{CastMember, PersonId};

/// Canonical key of an undirected edge: `(min(a, b), max(a, b))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EdgeKey {
    low: PersonId,
    high: PersonId,
}

impl EdgeKey {
    /// Build the key for `a` and `b`, or `None` for a self-pair.
    pub fn new(a: PersonId, b: PersonId) -> Option<Self> {
        if a == b {
            return None;
        }
        Some(Self {
            low: a.min(b),
            high: a.max(b),
        })
    }

    pub fn low(&self) -> PersonId {
        self.low
    }

    pub fn high(&self) -> PersonId {
        self.high
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint at all.
    pub fn other(&self, id: PersonId) -> Option<PersonId> {
        if id == self.low {
            Some(self.high)
        } else if id == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

/// Metadata carried by an edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeInfo {
    /// Title of the movie that currently owns the edge.
    pub label: String,
    pub last_date: Option<ReleaseDate>,
}

/// Which rule `add_edge` applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeUpdate {
    /// `a == b`, nothing changed.
    SelfLoop,
    /// New edge; both degrees went up by one.
    Created,
    /// Existing edge took the newer label and date.
    Relabeled,
    /// Existing edge kept its label (same, older or unknown date).
    Unchanged,
}

/// Undirected co-appearance graph with degree tracking.
///
/// Built once, then read. `add_edge` never creates nodes: an edge may
/// reference an id that was never passed to `add_node`, in which case it has
/// a degree but no name.
#[derive(Debug, Default, Clone)]
pub struct CollaborationGraph {
    nodes: BTreeMap<PersonId, String>,
    edges: BTreeMap<EdgeKey, EdgeInfo>,
    degree: BTreeMap<PersonId, usize>,
}

impl CollaborationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if absent. The first name seen for an id is kept.
    ///
    /// Returns `true` when the node was inserted.
    pub fn add_node(&mut self, id: PersonId, name: impl Into<String>) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id, name.into());
        true
    }

    /// Record that `a` and `b` appeared together in `label` released on `date`.
    pub fn add_edge(
        &mut self,
        a: PersonId,
        b: PersonId,
        label: impl Into<String>,
        date: Option<ReleaseDate>,
    ) -> EdgeUpdate {
        let Some(key) = EdgeKey::new(a, b) else {
            return EdgeUpdate::SelfLoop;
        };

        match self.edges.get_mut(&key) {
            None => {
                self.edges.insert(
                    key,
                    EdgeInfo {
                        label: label.into(),
                        last_date: date,
                    },
                );
                *self.degree.entry(a).or_default() += 1;
                *self.degree.entry(b).or_default() += 1;
                EdgeUpdate::Created
            }
            Some(info) => {
                if is_after(date, info.last_date) {
                    info.label = label.into();
                    info.last_date = date;
                    EdgeUpdate::Relabeled
                } else {
                    EdgeUpdate::Unchanged
                }
            }
        }
    }

    /// Fold one movie into the graph: every cast member becomes a node and
    /// gets an edge to `focal`.
    ///
    /// Returns how many new edges were created.
    pub fn record_movie(
        &mut self,
        focal: PersonId,
        title: &str,
        date: Option<ReleaseDate>,
        cast: &[CastMember],
    ) -> usize {
        let mut created = 0;
        for member in cast {
            self.add_node(member.id, member.name.as_str());
            let update = self.add_edge(focal, member.id, title, date);
            trace!(focal, member = member.id, title, ?update, "edge");
            if update == EdgeUpdate::Created {
                created += 1;
            }
        }
        created
    }

    pub fn total_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn total_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Every person whose degree equals the maximum, mapped to its name.
    ///
    /// Only ids touched by at least one edge are candidates; an id without a
    /// node maps to an empty name. An edgeless graph yields an empty map.
    pub fn max_degree_nodes(&self) -> BTreeMap<PersonId, String> {
        let max = self.max_degree();
        self.degree
            .iter()
            .filter(|&(_, &d)| d == max && max > 0)
            .map(|(&id, _)| (id, self.name(id).unwrap_or_default().to_string()))
            .collect()
    }

    /// Highest degree in the graph, zero when there are no edges.
    pub fn max_degree(&self) -> usize {
        self.degree.values().copied().max().unwrap_or(0)
    }

    pub fn degree(&self, id: PersonId) -> usize {
        self.degree.get(&id).copied().unwrap_or(0)
    }

    pub fn name(&self, id: PersonId) -> Option<&str> {
        self.nodes.get(&id).map(String::as_str)
    }

    pub fn contains_node(&self, id: PersonId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn edge(&self, a: PersonId, b: PersonId) -> Option<&EdgeInfo> {
        EdgeKey::new(a, b).and_then(|key| self.edges.get(&key))
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (PersonId, &str)> {
        self.nodes.iter().map(|(&id, name)| (id, name.as_str()))
    }

    /// Edges in ascending key order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &EdgeInfo)> {
        self.edges.iter().map(|(&key, info)| (key, info))
    }

    /// Per-id degree, ascending by id. Ids with no edges are absent.
    pub fn degrees(&self) -> impl Iterator<Item = (PersonId, usize)> {
        self.degree.iter().map(|(&id, &d)| (id, d))
    }

    pub fn neighbors(&self, id: PersonId) -> Vec<PersonId> {
        self.edges
            .keys()
            .filter_map(|key| key.other(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(text: &str) -> Option<ReleaseDate> {
        ReleaseDate::parse(text)
    }

    #[test]
    fn test_edge_key_is_canonical() {
        assert_eq!(EdgeKey::new(7, 3), EdgeKey::new(3, 7));
        let key = EdgeKey::new(7, 3).unwrap();
        assert_eq!((key.low(), key.high()), (3, 7));
        assert_eq!(key.other(3), Some(7));
        assert_eq!(key.other(7), Some(3));
        assert_eq!(key.other(5), None);
        assert!(EdgeKey::new(4, 4).is_none());
    }

    #[test]
    fn test_add_node_is_idempotent_first_name_wins() {
        let mut graph = CollaborationGraph::new();
        assert!(graph.add_node(1, "A"));
        assert!(!graph.add_node(1, "B"));
        assert_eq!(graph.total_nodes(), 1);
        assert_eq!(graph.name(1), Some("A"));
    }

    #[test]
    fn test_symmetric_edges_are_one_edge() {
        let mut graph = CollaborationGraph::new();
        graph.add_node(1, "A");
        graph.add_node(2, "B");

        assert_eq!(graph.add_edge(1, 2, "X", date("2001-01-01")), EdgeUpdate::Created);
        assert_eq!(graph.add_edge(2, 1, "X", date("2001-01-01")), EdgeUpdate::Unchanged);

        assert_eq!(graph.total_edges(), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.degree(2), 1);
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let mut graph = CollaborationGraph::new();
        graph.add_node(5, "E");

        assert_eq!(graph.add_edge(5, 5, "X", date("2001-01-01")), EdgeUpdate::SelfLoop);

        assert_eq!(graph.total_nodes(), 1);
        assert_eq!(graph.total_edges(), 0);
        assert_eq!(graph.degree(5), 0);
        assert!(graph.max_degree_nodes().is_empty());
    }

    #[test]
    fn test_most_recent_label_wins() {
        let mut graph = CollaborationGraph::new();
        graph.add_edge(1, 2, "Movie A", date("2010-01-01"));
        assert_eq!(
            graph.add_edge(1, 2, "Movie B", date("2015-01-01")),
            EdgeUpdate::Relabeled
        );

        let info = graph.edge(1, 2).unwrap();
        assert_eq!(info.label, "Movie B");
        assert_eq!(info.last_date, date("2015-01-01"));
        assert_eq!(graph.total_edges(), 1);
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn test_most_recent_label_wins_in_reverse_order() {
        let mut graph = CollaborationGraph::new();
        graph.add_edge(1, 2, "Movie B", date("2015-01-01"));
        assert_eq!(
            graph.add_edge(2, 1, "Movie A", date("2010-01-01")),
            EdgeUpdate::Unchanged
        );

        assert_eq!(graph.edge(1, 2).unwrap().label, "Movie B");
        assert_eq!(graph.total_edges(), 1);
        assert_eq!(graph.degree(2), 1);
    }

    #[test]
    fn test_equal_dates_keep_first_label() {
        let mut graph = CollaborationGraph::new();
        graph.add_edge(1, 2, "First", date("2012-05-05"));
        graph.add_edge(1, 2, "Second", date("2012-05-05"));
        assert_eq!(graph.edge(1, 2).unwrap().label, "First");
    }

    #[test]
    fn test_missing_date_keeps_existing_label() {
        let mut graph = CollaborationGraph::new();
        graph.add_edge(1, 2, "Dated", date("2012-05-05"));
        assert_eq!(graph.add_edge(1, 2, "Undated", None), EdgeUpdate::Unchanged);
        assert_eq!(graph.edge(1, 2).unwrap().label, "Dated");

        let mut graph = CollaborationGraph::new();
        graph.add_edge(1, 2, "Undated", None);
        assert_eq!(
            graph.add_edge(1, 2, "Dated", date("2012-05-05")),
            EdgeUpdate::Unchanged
        );
        assert_eq!(graph.edge(1, 2).unwrap().label, "Undated");
    }

    #[test]
    fn test_triangle_degrees_and_max_nodes() {
        let mut graph = CollaborationGraph::new();
        for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
            graph.add_node(id, name);
        }
        graph.add_edge(1, 2, "M", date("2000-06-01"));
        graph.add_edge(1, 3, "M", date("2000-06-01"));
        graph.add_edge(2, 3, "M", date("2000-06-01"));

        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.degree(2), 2);
        assert_eq!(graph.degree(3), 2);

        let expected: BTreeMap<PersonId, String> = [
            (1, "A".to_string()),
            (2, "B".to_string()),
            (3, "C".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(graph.max_degree_nodes(), expected);
    }

    #[test]
    fn test_empty_graph_has_no_max_nodes() {
        let graph = CollaborationGraph::new();
        assert_eq!(graph.max_degree(), 0);
        assert!(graph.max_degree_nodes().is_empty());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_edge_to_unknown_node_has_empty_name() {
        let mut graph = CollaborationGraph::new();
        graph.add_node(1, "Known");
        graph.add_edge(1, 99, "M", date("2003-03-03"));

        assert_eq!(graph.total_nodes(), 1);
        assert!(!graph.contains_node(99));

        let max = graph.max_degree_nodes();
        assert_eq!(max.get(&1).map(String::as_str), Some("Known"));
        assert_eq!(max.get(&99).map(String::as_str), Some(""));
    }

    #[test]
    fn test_record_movie_and_neighbors() {
        let mut graph = CollaborationGraph::new();
        graph.add_node(10, "Focal");
        let cast = vec![
            CastMember::new(11, "A", 0),
            CastMember::new(12, "B", 1),
            CastMember::new(11, "A again", 2),
        ];

        let created = graph.record_movie(10, "Shared", date("2011-11-11"), &cast);

        assert_eq!(created, 2);
        assert_eq!(graph.name(11), Some("A"));
        assert_eq!(graph.neighbors(10), vec![11, 12]);
        assert_eq!(graph.neighbors(11), vec![10]);
        assert_eq!(graph.degree(10), 2);
    }
}
