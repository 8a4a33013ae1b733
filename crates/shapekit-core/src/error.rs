//! Error handling for ShapeKit
//!
//! Geometry itself never fails: out-of-range values are clamped and
//! impossible edits are rejected by returning `false`. Errors only appear
//! at the edges of the system, where free-form input (selection names,
//! colour strings, configuration files) is turned into typed values.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Editor error type
///
/// Raised when external input cannot be mapped onto the editor's typed model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// A 2D shape selection name was not recognised
    #[error("Unknown shape kind: {name}")]
    UnknownShapeKind {
        /// The selection value that failed to parse.
        name: String,
    },

    /// A 3D solid selection name was not recognised
    #[error("Unknown solid kind: {name}")]
    UnknownSolidKind {
        /// The selection value that failed to parse.
        name: String,
    },

    /// Arc closure mode was not one of PIE, CHORD or OPEN
    #[error("Unknown arc mode: {name}")]
    UnknownArcMode {
        /// The selection value that failed to parse.
        name: String,
    },

    /// Material type was not recognised
    #[error("Unknown material: {name}")]
    UnknownMaterial {
        /// The selection value that failed to parse.
        name: String,
    },

    /// A colour string was not in `#rrggbb` form
    #[error("Invalid colour '{value}': expected #rrggbb")]
    InvalidColor {
        /// The rejected colour string.
        value: String,
    },

    /// A control id did not name a known parameter
    #[error("Unknown parameter control: {control}")]
    UnknownControl {
        /// The rejected control id.
        control: String,
    },

    /// A numeric parameter was not finite
    #[error("Invalid value for {field}: {reason}")]
    InvalidParameter {
        /// The parameter name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Main error type for ShapeKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Editor input error
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is an editor input error
    pub fn is_editor_error(&self) -> bool {
        matches!(self, Error::Editor(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
