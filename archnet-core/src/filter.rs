// Node inclusion predicates for the network view

use archnet_loader::Entity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User-selected inclusion criteria.
///
/// The default value filters nothing. Builder methods consume and return a
/// new value so callers always swap the whole state rather than mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub in_notable_list: Option<bool>,
    #[serde(default)]
    pub high_net_worth: Option<bool>,
    #[serde(default)]
    pub min_connections: u64,
    #[serde(default)]
    pub min_flights: u64,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_notable_list(mut self, flag: Option<bool>) -> Self {
        self.in_notable_list = flag;
        self
    }

    pub fn with_high_net_worth(mut self, flag: Option<bool>) -> Self {
        self.high_net_worth = flag;
        self
    }

    pub fn with_min_connections(mut self, min: u64) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_min_flights(mut self, min: u64) -> Self {
        self.min_flights = min;
        self
    }

    /// Whether any predicate can exclude a node.
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || !self.categories.is_empty()
            || self.in_notable_list.is_some()
            || self.high_net_worth.is_some()
            || self.min_connections > 0
            || self.min_flights > 0
    }

    /// One-line human summary of the active predicates.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.trim().is_empty() {
            parts.push(format!("search \"{}\"", self.search));
        }
        if !self.categories.is_empty() {
            let cats: Vec<&str> = self.categories.iter().map(String::as_str).collect();
            parts.push(format!("categories [{}]", cats.join(", ")));
        }
        if let Some(flag) = self.in_notable_list {
            parts.push(format!("notable list = {}", flag));
        }
        if let Some(flag) = self.high_net_worth {
            parts.push(format!("high net worth = {}", flag));
        }
        if self.min_connections > 0 {
            parts.push(format!("connections >= {}", self.min_connections));
        }
        if self.min_flights > 0 {
            parts.push(format!("flights >= {}", self.min_flights));
        }

        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Decide whether a single node passes every predicate of `filter`.
pub fn is_visible(node: &Entity, filter: &FilterState) -> bool {
    matches_search(node, &filter.search)
        && matches_categories(node, &filter.categories)
        && matches_flag(node.in_notable_list, filter.in_notable_list)
        && matches_flag(node.high_net_worth, filter.high_net_worth)
        && node.connection_count >= filter.min_connections
        && node.flight_count >= filter.min_flights
}

/// Nodes passing `filter`, in input order.
pub fn filter_nodes<'a>(nodes: &'a [Entity], filter: &FilterState) -> Vec<&'a Entity> {
    nodes.iter().filter(|node| is_visible(node, filter)).collect()
}

fn matches_search(node: &Entity, search: &str) -> bool {
    // blank means no search; otherwise the text is matched as typed
    if search.trim().is_empty() {
        return true;
    }

    let needle = search.to_lowercase();

    node.name.to_lowercase().contains(&needle)
        || node
            .name_variants
            .iter()
            .any(|variant| variant.to_lowercase().contains(&needle))
}

fn matches_categories(node: &Entity, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || node.categories.iter().any(|c| selected.contains(c))
}

fn matches_flag(value: bool, wanted: Option<bool>) -> bool {
    wanted.is_none_or(|w| w == value)
}
