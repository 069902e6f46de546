//! Configuration system tests
//!
//! Tests for config paths and config loading/saving.

mod common;

use common::test_model_with_config;
use gridsync::config::AppConfig;
use gridsync::config_paths;
use gridsync::messages::{Msg, ResizeMsg};
use gridsync::update::update;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("gridsync"));
}

#[test]
fn test_config_dir_uses_dot_config_on_unix() {
    #[cfg(not(target_os = "windows"))]
    {
        if std::env::var_os("XDG_CONFIG_HOME").is_some() {
            return;
        }
        let dir = config_paths::config_dir().unwrap();
        assert!(
            dir.to_string_lossy().contains(".config"),
            "Expected .config in path, got: {}",
            dir.display()
        );
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// App Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.min_panel_width, 100.0);
    assert_eq!(config.min_column_width, 50.0);
    assert!(config.load_sample);
}

#[test]
fn test_config_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = AppConfig {
        min_column_width: 80.0,
        load_sample: false,
        ..AppConfig::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(AppConfig::load_from(&path), config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "min_column_width: 30\n").unwrap();

    let config = AppConfig::load_from(&path);
    assert_eq!(config.min_column_width, 30.0);
    assert_eq!(config.container_width, 1200.0);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "min_column_width: [not, a, number]\n").unwrap();

    assert_eq!(AppConfig::load_from(&path), AppConfig::default());
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        AppConfig::load_from(&dir.path().join("absent.yaml")),
        AppConfig::default()
    );
}

#[test]
fn test_config_limits_apply_to_drags() {
    let config = AppConfig {
        min_column_width: 120.0,
        ..AppConfig::default()
    };
    let mut model = test_model_with_config("a,b", config);

    update(&mut model, Msg::Resize(ResizeMsg::StartColumn { col: 0, x: 0.0 }));
    update(&mut model, Msg::Resize(ResizeMsg::Move { x: -1000.0 }));

    assert_eq!(model.layout.column_width(0), 120.0);
}
