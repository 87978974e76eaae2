//! Tests for TOML config loading, seeding, and path resolution.

use super::*;

fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[view]
default_height = 240
width = 600

[script]
max_polls = 25
"#,
    );

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.view.default_height, 240);
    assert_eq!(config.view.width, Some(600));
    assert_eq!(config.script.max_polls, Some(25));
    // Defaults preserved
    assert!(config.view.auto_height);
    assert_eq!(config.script.poll_interval_ms, 200);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "this is not valid toml {{{");

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[script]
poll_interval_ms = 1
"#,
    );

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("script.poll_interval_ms = 1"));
}

#[test]
fn directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(dir.path()).unwrap_err();
    assert!(!matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn parse_config_accepts_empty_text() {
    let config = parse_config("").unwrap();
    assert!(config.view.auto_height);
    assert_eq!(config.view.default_height, 100);
}

#[test]
fn load_or_create_seeds_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let loaded = load_or_create(&path).unwrap();
    assert_eq!(loaded.source, ConfigSource::Created(path.clone()));
    assert!(path.exists());

    let loaded = load_or_create(&path).unwrap();
    assert_eq!(loaded.source, ConfigSource::File(path));
    assert_eq!(loaded.config.view.default_height, 100);
}

#[test]
fn load_or_create_keeps_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[view]\nwidth = 0\n");

    let err = load_or_create(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[view]\nwidth = 0\n");
}

#[test]
fn default_config_text_parses_to_defaults() {
    let config = parse_config(DEFAULT_CONFIG_TOML).unwrap();
    assert!(config.view.auto_height);
    assert!(config.script.max_polls.is_none());
    assert!(config.webview.user_agent.is_none());
}

#[test]
fn default_config_path_ends_with_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("autoheight"));
        assert!(path_str.ends_with("config.toml"));
    }
}
