//! Collaboration graph to DOT.

use std::collections::BTreeSet;

use costar_core::{CollaborationGraph, PersonId};

use crate::dot::DotBuilder;

const NODE_FILL: &str = "#cce5ff";
const HIGHLIGHT_FILL: &str = "#ffd966";

/// Options for graph rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render people without any collaboration edge.
    pub show_orphan_nodes: bool,
    /// Put the owning movie title on every edge.
    pub edge_labels: bool,
    /// People drawn with a distinct fill (focal person, best connected).
    pub highlight: BTreeSet<PersonId>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_orphan_nodes: true,
            edge_labels: true,
            highlight: BTreeSet::new(),
        }
    }
}

/// DOT identifier of a person.
pub fn node_id(id: PersonId) -> String {
    format!("n{id}")
}

/// Render the graph as an undirected DOT document.
///
/// Output is deterministic: nodes by ascending id, edges by canonical key.
pub fn render_graph(graph: &CollaborationGraph, options: &RenderOptions) -> String {
    let mut builder = DotBuilder::new("G");
    builder
        .attr("splines", "true")
        .attr("overlap", "false")
        .node_defaults(&[
            ("shape", "ellipse"),
            ("style", "filled"),
            ("fillcolor", NODE_FILL),
        ])
        .blank();

    for (id, name) in graph.nodes() {
        if !options.show_orphan_nodes && graph.degree(id) == 0 {
            continue;
        }
        if options.highlight.contains(&id) {
            builder.node(&node_id(id), &[("label", name), ("fillcolor", HIGHLIGHT_FILL)]);
        } else {
            builder.node(&node_id(id), &[("label", name)]);
        }
    }

    builder.blank();

    for (key, info) in graph.edges() {
        let (low, high) = (node_id(key.low()), node_id(key.high()));
        if options.edge_labels {
            builder.edge(&low, &high, &[("label", info.label.as_str())]);
        } else {
            builder.edge(&low, &high, &[]);
        }
    }

    builder.build()
}
