//! Tests for configuration loading

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use replate::config::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.risk.surplus_window_days, 7);
    assert!((config.impact.co2_per_kg - 2.5).abs() < 1e-9);
    assert!((config.impact.meals_per_kg - 10.0).abs() < 1e-9);
    assert!((config.impact.cost_per_kg - 250.0).abs() < 1e-9);
    assert_eq!(config.paths.recipients, "recipients.toml");
    assert_eq!(config.llm.model, "gemini-3-flash-preview");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("replate.toml");
    fs::write(&path, "[site]\nname = \"test kitchen\"\nlat = 12.9\nlng = 77.6\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.site.name, "test kitchen");
    assert_eq!(config.risk.surplus_window_days, 7);
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("replate.toml");
    fs::write(&path, "site = [[[").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}

#[test]
fn test_save_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("replate.toml");

    let mut config = Config::default();
    config.site.name = "rooftop kitchen".to_string();
    config.risk.surplus_window_days = 3;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.site.name, "rooftop kitchen");
    assert_eq!(loaded.risk.surplus_window_days, 3);
}

#[test]
#[serial]
fn test_load_prefers_project_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("replate.toml"),
        "[risk]\nsurplus_window_days = 2\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = Config::load();
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap().risk.surplus_window_days, 2);
}

#[test]
#[serial]
fn test_load_without_files_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = Config::load();
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap().risk.surplus_window_days, 7);
}
