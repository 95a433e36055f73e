use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A person or organization in the archive graph.
///
/// Every field decodes leniently: missing, `null` or malformed values fall
/// back to their defaults so downstream predicates only ever see plain
/// numbers, strings and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, alias = "label", deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, alias = "aliases", deserialize_with = "lenient_strings")]
    pub name_variants: Vec<String>,
    #[serde(
        default,
        alias = "category",
        alias = "tags",
        deserialize_with = "lenient_strings"
    )]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub in_notable_list: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub high_net_worth: bool,
    #[serde(default, alias = "connections", deserialize_with = "lenient_count")]
    pub connection_count: u64,
    #[serde(default, alias = "flights", deserialize_with = "lenient_count")]
    pub flight_count: u64,
}

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            name_variants: Vec::new(),
            categories: Vec::new(),
            in_notable_list: false,
            high_net_worth: false,
            connection_count: 0,
            flight_count: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_variants = variants.into_iter().map(Into::into).collect();
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

    pub fn with_connections(mut self, count: u64) -> Self {
        self.connection_count = count;
        self
    }

    pub fn with_flights(mut self, count: u64) -> Self {
        self.flight_count = count;
        self
    }

    pub fn with_notable_list(mut self, flag: bool) -> Self {
        self.in_notable_list = flag;
        self
    }

    pub fn with_high_net_worth(mut self, flag: bool) -> Self {
        self.high_net_worth = flag;
        self
    }
}

/// A weighted, undirected relationship between two entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default, alias = "from", deserialize_with = "lenient_id")]
    pub source: String,
    #[serde(default, alias = "to", deserialize_with = "lenient_id")]
    pub target: String,
    #[serde(default, alias = "value", deserialize_with = "lenient_count")]
    pub weight: u64,
}

impl Relationship {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: u64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// True when `id` is either endpoint.
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint at all.
    pub fn other_endpoint(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// The full node/edge payload served by the graph endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub nodes: Vec<Entity>,
    #[serde(default, alias = "links", deserialize_with = "lenient_seq")]
    pub edges: Vec<Relationship>,
}

impl GraphData {
    pub fn new(nodes: Vec<Entity>, edges: Vec<Relationship>) -> Self {
        Self { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find_node(&self, id: &str) -> Option<&Entity> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        // force-layout libraries replace endpoint ids with node objects
        Some(Value::Object(map)) => match map.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        },
        _ => String::new(),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s],
        _ => Vec::new(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => number_to_count(&n),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(float_to_count)
            .unwrap_or(0),
        _ => 0,
    })
}

fn number_to_count(n: &serde_json::Number) -> u64 {
    if let Some(u) = n.as_u64() {
        u
    } else if n.as_i64().is_some() {
        // negative integers
        0
    } else {
        n.as_f64().map(float_to_count).unwrap_or(0)
    }
}

fn float_to_count(f: f64) -> u64 {
    if f.is_finite() && f > 0.0 {
        f.trunc() as u64
    } else {
        0
    }
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_counts_default_to_zero() {
        let entity: Entity = serde_json::from_str(r#"{"id": "A", "name": "Alice"}"#).unwrap();
        assert_eq!(entity.connection_count, 0);
        assert_eq!(entity.flight_count, 0);
        assert!(entity.categories.is_empty());
        assert!(!entity.in_notable_list);
    }

    #[test]
    fn test_null_and_negative_counts_normalize() {
        let entity: Entity = serde_json::from_str(
            r#"{"id": 7, "connection_count": null, "flight_count": -4}"#,
        )
        .unwrap();
        assert_eq!(entity.id, "7");
        assert_eq!(entity.connection_count, 0);
        assert_eq!(entity.flight_count, 0);
    }

    #[test]
    fn test_fractional_and_string_counts() {
        let entity: Entity =
            serde_json::from_str(r#"{"id": "A", "connections": 4.9, "flights": "12"}"#).unwrap();
        assert_eq!(entity.connection_count, 4);
        assert_eq!(entity.flight_count, 12);
    }

    #[test]
    fn test_single_category_string() {
        let entity: Entity =
            serde_json::from_str(r#"{"id": "A", "category": "politics"}"#).unwrap();
        assert_eq!(entity.categories, vec!["politics".to_string()]);
    }

    #[test]
    fn test_edge_endpoint_objects() {
        let edge: Relationship = serde_json::from_str(
            r#"{"source": {"id": "A", "x": 1.0}, "target": "B", "weight": 3}"#,
        )
        .unwrap();
        assert_eq!(edge.source, "A");
        assert_eq!(edge.target, "B");
        assert_eq!(edge.weight, 3);
    }

    #[test]
    fn test_other_endpoint() {
        let edge = Relationship::new("A", "B", 1);
        assert_eq!(edge.other_endpoint("A"), Some("B"));
        assert_eq!(edge.other_endpoint("B"), Some("A"));
        assert_eq!(edge.other_endpoint("C"), None);
    }

    #[test]
    fn test_graph_null_lists() {
        let graph: GraphData = serde_json::from_str(r#"{"nodes": null}"#).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
