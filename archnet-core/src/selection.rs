// Selection and neighbor highlighting

use crate::project::VisibleSubgraph;
use archnet_loader::Relationship;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// The clicked node and the visible nodes directly connected to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub selected_id: Option<String>,
    pub neighbor_ids: Vec<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.selected_id.is_none()
    }
}

/// Compute the selection for `node_id` against the given (visible) edges.
///
/// Neighbors are sorted and never include `node_id` itself. This does not
/// check that `node_id` is visible: an unknown id comes back selected with
/// no neighbors. Use [`SelectionTracker::select`] to ignore clicks on nodes
/// outside the visible subgraph.
pub fn select_node(node_id: &str, edges: &[Relationship]) -> Selection {
    let neighbors: BTreeSet<&str> = edges
        .iter()
        .filter_map(|edge| edge.other_endpoint(node_id))
        .filter(|other| *other != node_id)
        .collect();

    Selection {
        selected_id: Some(node_id.to_string()),
        neighbor_ids: neighbors.into_iter().map(str::to_string).collect(),
    }
}

pub fn clear_selection() -> Selection {
    Selection::default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Unselected,
    Selected(String),
}

/// Owns the current selection for one network view.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selection: Selection,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        match &self.selection.selected_id {
            Some(id) => SelectionState::Selected(id.clone()),
            None => SelectionState::Unselected,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Node click. Returns whether the selection changed.
    ///
    /// Nodes outside the visible subgraph are ignored, and clicking the
    /// node that is already selected keeps it selected.
    pub fn select(&mut self, node_id: &str, view: &VisibleSubgraph) -> bool {
        if !view.contains_node(node_id) {
            debug!("Ignoring selection of non-visible node {}", node_id);
            return false;
        }
        if self.is_selected(node_id) {
            return false;
        }

        self.selection = select_node(node_id, &view.edges);
        true
    }

    /// Background click or navigation away.
    pub fn clear(&mut self) {
        self.selection = clear_selection();
    }

    /// Re-derive neighbors after the visible subgraph changed; drops the
    /// selection if its node was filtered out.
    pub fn refresh(&mut self, view: &VisibleSubgraph) {
        let Some(id) = self.selection.selected_id.clone() else {
            return;
        };

        if view.contains_node(&id) {
            self.selection = select_node(&id, &view.edges);
        } else {
            debug!("Selected node {} is no longer visible", id);
            self.clear();
        }
    }

    pub fn is_selected(&self, node_id: &str) -> bool {
        self.selection.selected_id.as_deref() == Some(node_id)
    }

    /// Selected node or one of its neighbors.
    pub fn is_highlighted(&self, node_id: &str) -> bool {
        self.is_selected(node_id)
            || self
                .selection
                .neighbor_ids
                .binary_search_by(|id| id.as_str().cmp(node_id))
                .is_ok()
    }
}
