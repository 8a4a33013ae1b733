//! # ShapeKit
//!
//! An interactive editor for a single primitive shape, driven either by
//! sliders or by dragging anchors drawn on the shape itself.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Value types, parameter events, editor tuning, errors
//! 2. **shapekit-designer** - Anchors, hit testing, inverse mapping, sessions
//! 3. **shapekit-settings** - Configuration files and validation
//! 4. **shapekit** - Command-line driver that replays scripted input
//!
//! ## Features
//!
//! - **2D primitives**: rectangle, ellipse, triangle, line, quad, arc, point
//! - **Free-form polygons**: double-click to insert or delete vertices
//! - **3D solids**: box, sphere, cylinder, cone, torus, plane with material
//!   and lighting parameters
//! - **Two-way binding**: every drag is mirrored back to its controls

pub mod replay;

pub use shapekit_core::{
    Color, EditorConfig, EditorError, Error, ParamChange, ParamField, ParamValue,
    ParameterListener, Point, Point3, Result,
};
pub use shapekit_designer::{
    compute_anchors, inverse_map, Anchor, AnchorRole, ControlMirror, DragUpdate, EditorMode,
    EditorSession, FreeformPolygon, PressOutcome, ShapeKind, ShapeParams, SolidKind,
    SolidParams,
};
pub use shapekit_settings::{Config, DefaultShape, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support
/// - INFO by default, DEBUG when `verbose` is set
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
