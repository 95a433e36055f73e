use crate::filter::{FilterState, filter_nodes};
use crate::project::{VisibleSubgraph, project_edges, visible_ids};
use crate::stats::{StatisticsSnapshot, TOP_CONNECTED_LIMIT, compute_statistics_with_limit};
use archnet_loader::{Entity, GraphData};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Output of one filter pass: what to render and what to display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAnalysis {
    pub subgraph: VisibleSubgraph,
    pub statistics: StatisticsSnapshot,
}

/// Filter, project and aggregate the raw graph.
pub fn analyze(graph: &GraphData, filter: &FilterState) -> NetworkAnalysis {
    analyze_with_limit(graph, filter, TOP_CONNECTED_LIMIT)
}

pub fn analyze_with_limit(graph: &GraphData, filter: &FilterState, top_n: usize) -> NetworkAnalysis {
    let visible_nodes = filter_nodes(&graph.nodes, filter);
    let ids = visible_ids(&visible_nodes);
    let visible_edges = project_edges(&graph.edges, &ids);

    debug!(
        "Filter [{}] kept {}/{} nodes and {}/{} edges",
        filter.describe(),
        visible_nodes.len(),
        graph.node_count(),
        visible_edges.len(),
        graph.edge_count()
    );

    let subgraph = VisibleSubgraph {
        nodes: visible_nodes.into_iter().cloned().collect(),
        edges: visible_edges.into_iter().cloned().collect(),
    };
    let statistics = compute_statistics_with_limit(&subgraph.nodes, &subgraph.edges, top_n);

    NetworkAnalysis {
        subgraph,
        statistics,
    }
}

/// A category tag and how many nodes carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub category: String,
    pub count: usize,
}

/// Distinct categories in `nodes`, most common first, then by name.
pub fn category_facets(nodes: &[Entity]) -> Vec<CategoryFacet> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for node in nodes {
        let mut seen: Vec<&str> = Vec::with_capacity(node.categories.len());
        for category in &node.categories {
            // a node counts once per tag even if the tag repeats
            let category = category.as_str();
            if !seen.contains(&category) {
                seen.push(category);
                *counts.entry(category).or_default() += 1;
            }
        }
    }

    let mut facets: Vec<CategoryFacet> = counts
        .into_iter()
        .map(|(category, count)| CategoryFacet {
            category: category.to_string(),
            count,
        })
        .collect();
    facets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    facets
}
