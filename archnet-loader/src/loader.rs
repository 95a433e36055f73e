use crate::error::{LoadError, Result};
use crate::model::GraphData;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

/// Where the raw graph comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    Url(Url),
    File(PathBuf),
}

impl GraphSource {
    /// Classify an argument: anything that parses as an http(s) URL is
    /// fetched, everything else is read from disk.
    pub fn parse(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => GraphSource::Url(url),
            _ => GraphSource::File(PathBuf::from(source)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            GraphSource::Url(url) => url.to_string(),
            GraphSource::File(path) => path.display().to_string(),
        }
    }
}

pub struct GraphLoader {
    client: Client,
    timeout_secs: u64,
}

impl GraphLoader {
    pub fn new() -> Result<Self> {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("archnet/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Load the graph once from either a URL or a file.
    pub async fn load(&self, source: &GraphSource) -> Result<GraphData> {
        match source {
            GraphSource::Url(url) => self.fetch(url.as_str()).await,
            GraphSource::File(path) => load_graph_from_file(path),
        }
    }

    /// Single GET of `{ nodes, edges }` from the graph endpoint.
    pub async fn fetch(&self, url: &str) -> Result<GraphData> {
        let parsed =
            Url::parse(url).map_err(|e| LoadError::InvalidUrl(format!("{}: {}", url, e)))?;

        info!("Fetching graph from {}", parsed);
        let start = Instant::now();

        let response = self.client.get(parsed.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Graph endpoint {} returned {}", parsed, status);
            return Err(LoadError::Status {
                url: parsed.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let graph = parse_graph(&body)?;

        debug!(
            "Fetched {} nodes and {} edges in {:?}",
            graph.node_count(),
            graph.edge_count(),
            start.elapsed()
        );

        Ok(graph)
    }
}

/// Decode a graph payload from JSON text.
pub fn parse_graph(json: &str) -> Result<GraphData> {
    let graph: GraphData = serde_json::from_str(json)?;
    Ok(graph)
}

/// Read and decode a graph payload from disk.
pub fn load_graph_from_file(path: &Path) -> Result<GraphData> {
    info!("Loading graph from {}", path.display());
    let content = fs::read_to_string(path)?;
    let graph = parse_graph(&content)?;
    debug!(
        "Loaded {} nodes and {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}
