//! ShapeKit Settings Crate
//!
//! Loads, validates and stores the editor configuration: canvas bounds,
//! pointer tolerances and the shapes a new session starts with.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, DefaultShape, CONFIG_FILE_NAME, CONFIG_DIR_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
