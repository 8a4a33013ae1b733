//! # ShapeKit Core
//!
//! Core types, events, and utilities for ShapeKit.
//! Provides the value types shared by the editor crates, the interaction
//! tuning record, the parameter change events that keep UI controls in sync,
//! and the error hierarchy.

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::EditorConfig;
pub use error::{EditorError, Error, Result};
pub use events::{ParamChange, ParamField, ParamValue, ParameterListener};
pub use types::{shared, Color, Point, Point3, Shared};
