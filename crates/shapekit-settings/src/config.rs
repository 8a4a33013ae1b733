//! Configuration management for ShapeKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform configuration directory.
//!
//! Configuration is organized into two sections:
//! - Editor tuning (canvas bounds, hit radii, double-click limits)
//! - Start-up shapes (2D kind and 3D solid kind)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use shapekit_core::EditorConfig;
use shapekit_designer::{EditorSession, ShapeKind, SolidKind};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Directory under the platform config dir that holds ShapeKit's files.
pub const CONFIG_DIR_NAME: &str = "shapekit";
/// Name of the default configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Shapes selected when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultShape {
    /// 2D shape kind
    pub kind: ShapeKind,
    /// 3D solid kind
    pub solid_kind: SolidKind,
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas and pointer tuning
    pub editor: EditorConfig,
    /// Start-up shapes
    pub defaults: DefaultShape,
}

/// Serialization format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// `<config_dir>/shapekit/config.toml`, falling back to the home directory
/// and then the working directory when no config dir is known.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let editor = &self.editor;

        let positive = [
            ("editor.canvas_width", editor.canvas_width),
            ("editor.canvas_height", editor.canvas_height),
            ("editor.anchor_hit_radius", editor.anchor_hit_radius),
            ("editor.edge_hit_distance", editor.edge_hit_distance),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if editor.double_click_window_ms == 0 {
            return Err(ConfigError::out_of_range(
                "editor.double_click_window_ms",
                editor.double_click_window_ms,
            ));
        }

        if !(editor.double_click_tolerance.is_finite() && editor.double_click_tolerance >= 0.0) {
            return Err(ConfigError::out_of_range(
                "editor.double_click_tolerance",
                editor.double_click_tolerance,
            ));
        }

        Ok(())
    }

    /// A fresh session using this configuration and its start-up shapes.
    pub fn build_session(&self) -> EditorSession {
        let mut session = EditorSession::new(self.editor.clone());
        session.set_shape_kind(self.defaults.kind);
        session.set_solid_kind(self.defaults.solid_kind);
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let mut config = Config::default();
        config.editor.canvas_height = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::out_of_range("editor.canvas_height", 0.0))
        );

        let mut config = Config::default();
        config.editor.anchor_hit_radius = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.editor.double_click_window_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.editor.edge_hit_distance = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_by_extension() {
        assert_eq!(Format::from_path(Path::new("a.json")), Ok(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.toml")), Ok(Format::Toml));
        assert_eq!(
            Format::from_path(Path::new("a.yaml")),
            Err(ConfigError::UnsupportedFormat("yaml".to_string()))
        );
        assert!(Format::from_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_default_path_layout() {
        let path = default_config_path();
        assert!(path.ends_with("shapekit/config.toml"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [editor]
            canvas_width = 800.0

            [defaults]
            kind = "arc"
            "#,
        )
        .unwrap();
        assert_eq!(config.editor.canvas_width, 800.0);
        assert_eq!(config.editor.canvas_height, 400.0);
        assert_eq!(config.defaults.kind, ShapeKind::Arc);
        assert_eq!(config.defaults.solid_kind, SolidKind::Box);
    }

    #[test]
    fn test_build_session_uses_defaults() {
        let mut config = Config::default();
        config.defaults.kind = ShapeKind::Triangle;
        config.defaults.solid_kind = SolidKind::Torus;
        config.editor.canvas_width = 600.0;

        let session = config.build_session();
        assert_eq!(session.kind(), Some(ShapeKind::Triangle));
        assert_eq!(session.solid().kind, SolidKind::Torus);
        assert_eq!(session.config().canvas_width, 600.0);
        assert_eq!(session.anchors().len(), 4);
    }
}
