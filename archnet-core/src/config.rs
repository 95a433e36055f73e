use crate::stats::TOP_CONNECTED_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_CONFIG_DIR: &str = "~/.config/archnet/";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Graph endpoint URL or JSON file used when no source is given.
    pub graph_source: Option<String>,
    pub timeout_secs: u64,
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph_source: None,
            timeout_secs: 10,
            top_n: TOP_CONNECTED_LIMIT,
        }
    }
}

impl Config {
    /// Read the config at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(path, content).map_err(io_err)?;

        info!("Wrote config to {}", path.display());
        Ok(())
    }

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }
}

/// Expand `~` in a config directory and append the config file name.
pub fn config_path(dir: &str) -> PathBuf {
    let expanded = shellexpand::tilde(dir);
    Path::new(expanded.as_ref()).join(CONFIG_FILE_NAME)
}

pub fn default_config_path() -> PathBuf {
    config_path(DEFAULT_CONFIG_DIR)
}
