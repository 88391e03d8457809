//! Tests for config loading

use super::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_missing_file_yields_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = load_config(Some(&path));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[search]\ndebounce_ms = 120\n\n[lookup]\ntimeout_secs = 3").unwrap();

    let result = load_config(Some(file.path()));

    assert!(result.warning.is_none());
    assert_eq!(result.config.search.debounce_ms, 120);
    assert_eq!(result.config.search.min_query_chars, 2);
    assert_eq!(result.config.lookup.timeout_secs, 3);
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[search\ndebounce_ms = ").unwrap();

    let result = load_config(Some(file.path()));

    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("malformed config should warn");
    assert!(warning.contains("Invalid config file"));
}

#[test]
fn test_load_config_from_path_reports_invalid_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[lookup]\ntimeout_secs = \"soon\"").unwrap();

    let err = load_config_from_path(file.path()).unwrap_err();
    assert!(matches!(err, SwsearchError::InvalidConfig { .. }));
}

#[test]
fn test_directory_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();

    let err = load_config_from_path(dir.path()).unwrap_err();
    assert!(!matches!(err, SwsearchError::InvalidConfig { .. }));
}

#[test]
fn test_config_path_points_into_swsearch_dir() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/swsearch/config.toml"));
    }
}
