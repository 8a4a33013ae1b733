//! Settings files on disk.

use shapekit_designer::{ShapeKind, SolidKind};
use shapekit_settings::{Config, SettingsError};
use tempfile::TempDir;

fn custom_config() -> Config {
    let mut config = Config::new();
    config.editor.canvas_width = 640.0;
    config.editor.canvas_height = 480.0;
    config.editor.anchor_hit_radius = 12.0;
    config.editor.double_click_window_ms = 450;
    config.defaults.kind = ShapeKind::Freeform;
    config.defaults.solid_kind = SolidKind::Cone;
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = custom_config();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = custom_config();
    config.save_to_file(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"freeform\""));
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[editor]\ncanvas_width = 0.0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_invalid_config_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::new();
    config.editor.edge_hit_distance = 0.0;

    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_malformed_and_unknown_formats() {
    let dir = TempDir::new().unwrap();

    let json = dir.path().join("config.json");
    std::fs::write(&json, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&json),
        Err(SettingsError::JsonError(_))
    ));

    let yaml = dir.path().join("config.yaml");
    std::fs::write(&yaml, "editor: {}").unwrap();
    assert!(matches!(
        Config::load_from_file(&yaml),
        Err(SettingsError::Config(_))
    ));
}

#[test]
fn test_load_or_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        Config::load_from_file(&missing),
        Err(SettingsError::LoadError(_))
    ));
}
