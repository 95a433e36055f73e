//! Aggregate statistics over a visible subgraph.
//!
//! Everything here is recomputed from scratch for each filter change. Graphs
//! are in the hundreds of nodes, so there is no incremental bookkeeping.

use archnet_loader::{Entity, Relationship};
use petgraph::graphmap::UnGraphMap;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Default length of the top-connected ranking.
pub const TOP_CONNECTED_LIMIT: usize = 10;

/// Entry of the top-connected ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntity {
    pub id: String,
    pub name: String,
    pub connection_count: u64,
    pub flight_count: u64,
}

impl From<&Entity> for RankedEntity {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
            connection_count: entity.connection_count,
            flight_count: entity.flight_count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub node_count: usize,
    pub edge_count: usize,
    /// Fraction of possible node pairs that are connected, in `[0, 1]`.
    pub density: f64,
    pub density_percent: f64,
    /// Mean local clustering over nodes with at least two neighbors.
    pub clustering_coefficient: f64,
    pub clustering_percent: f64,
    pub top_connected: Vec<RankedEntity>,
}

pub fn compute_statistics(nodes: &[Entity], edges: &[Relationship]) -> StatisticsSnapshot {
    compute_statistics_with_limit(nodes, edges, TOP_CONNECTED_LIMIT)
}

pub fn compute_statistics_with_limit(
    nodes: &[Entity],
    edges: &[Relationship],
    top_n: usize,
) -> StatisticsSnapshot {
    let graph = build_graph(nodes, edges);

    let density = density(nodes.len(), &graph);
    let clustering = clustering_coefficient(&graph);

    StatisticsSnapshot {
        node_count: nodes.len(),
        edge_count: edges.len(),
        density,
        density_percent: density * 100.0,
        clustering_coefficient: clustering,
        clustering_percent: clustering * 100.0,
        top_connected: top_connected(nodes, top_n),
    }
}

/// Undirected view of the subgraph: one edge per distinct pair, self-loops
/// and edges to unknown nodes dropped, pair weights summed.
fn build_graph<'a>(nodes: &'a [Entity], edges: &'a [Relationship]) -> UnGraphMap<&'a str, u64> {
    let mut graph = UnGraphMap::with_capacity(nodes.len(), edges.len());
    for node in nodes {
        graph.add_node(node.id.as_str());
    }

    for edge in edges {
        let (a, b) = (edge.source.as_str(), edge.target.as_str());
        if edge.is_self_loop() || !graph.contains_node(a) || !graph.contains_node(b) {
            continue;
        }
        if let Some(weight) = graph.edge_weight_mut(a, b) {
            *weight += edge.weight;
        } else {
            graph.add_edge(a, b, edge.weight);
        }
    }

    graph
}

/// Distinct connected pairs over the pairs possible among `n` visible nodes.
fn density(n: usize, graph: &UnGraphMap<&str, u64>) -> f64 {
    if n < 2 {
        return 0.0;
    }

    let max_edges = (n * (n - 1) / 2) as f64;
    (graph.edge_count() as f64 / max_edges).clamp(0.0, 1.0)
}

fn clustering_coefficient(graph: &UnGraphMap<&str, u64>) -> f64 {
    let mut total = 0.0;
    let mut counted = 0usize;

    for node in graph.nodes() {
        let neighbors: Vec<&str> = graph.neighbors(node).collect();
        let k = neighbors.len();
        if k < 2 {
            continue;
        }

        let mut links = 0usize;
        for (i, a) in neighbors.iter().enumerate() {
            for b in &neighbors[i + 1..] {
                if graph.contains_edge(*a, *b) {
                    links += 1;
                }
            }
        }

        let possible = (k * (k - 1) / 2) as f64;
        total += links as f64 / possible;
        counted += 1;
    }

    if counted == 0 {
        0.0
    } else {
        total / counted as f64
    }
}

/// Nodes by `connection_count` descending, ties by id, truncated to `limit`.
pub fn top_connected(nodes: &[Entity], limit: usize) -> Vec<RankedEntity> {
    let mut ranked: Vec<&Entity> = nodes.iter().collect();
    ranked.sort_by(|a, b| {
        Reverse(a.connection_count)
            .cmp(&Reverse(b.connection_count))
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked.into_iter().take(limit).map(RankedEntity::from).collect()
}
