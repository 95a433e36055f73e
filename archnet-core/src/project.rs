use archnet_loader::{Entity, Relationship};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The node and edge subset passing the current filter.
///
/// Both lists keep the order of the raw graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleSubgraph {
    pub nodes: Vec<Entity>,
    pub edges: Vec<Relationship>,
}

impl VisibleSubgraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&Entity> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// Ids of the given nodes, for membership checks during projection.
pub fn visible_ids<'a>(nodes: &[&'a Entity]) -> HashSet<&'a str> {
    nodes.iter().map(|node| node.id.as_str()).collect()
}

/// Keep the edges whose endpoints are both visible.
///
/// Output preserves input order, so unchanged filters always yield the same
/// edge sequence.
pub fn project_edges<'a>(
    edges: &'a [Relationship],
    visible: &HashSet<&str>,
) -> Vec<&'a Relationship> {
    if visible.is_empty() {
        return Vec::new();
    }

    edges
        .iter()
        .filter(|edge| {
            visible.contains(edge.source.as_str()) && visible.contains(edge.target.as_str())
        })
        .collect()
}
