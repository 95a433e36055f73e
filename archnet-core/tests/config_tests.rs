// Tests for config loading and saving

use archnet_core::config::{CONFIG_FILE_NAME, Config, ConfigError, config_path};
use tempfile::TempDir;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(&dir.path().join("absent.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.top_n, 10);
    assert_eq!(config.timeout_secs, 10);
    assert!(config.graph_source.is_none());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

    let config = Config {
        graph_source: Some("http://localhost:8000/api/network".to_string()),
        timeout_secs: 30,
        top_n: 25,
    };
    config.save(&path).unwrap();

    assert!(Config::exists(&path));
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, r#"{"top_n": 5}"#).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.top_n, 5);
    assert_eq!(config.timeout_secs, 10);
}

#[test]
fn test_invalid_config_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "not json").unwrap();

    let result = Config::load(&path);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_config_path_appends_file_name() {
    let path = config_path("/tmp/archnet");
    assert!(path.ends_with(CONFIG_FILE_NAME));
    assert!(path.starts_with("/tmp/archnet"));
}
