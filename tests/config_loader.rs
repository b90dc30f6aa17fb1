mod common;

use common::temp_file;
use schools_store::config::{Config, ConfigError};
use std::path::PathBuf;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.logging.filter, "info");
    assert!(config.replay.stop_on_error);
    assert!(config.replay.seed.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("schools-store/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[replay]
stop_on_error = false
seed = "snapshot.json"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logging.filter, "info");
    assert!(!config.replay.stop_on_error);
    assert_eq!(config.replay.seed, Some(PathBuf::from("snapshot.json")));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[logging\nfilter = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_blank_filter_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[logging]\nfilter = \"  \"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
