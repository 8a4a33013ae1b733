//! Shared value types and type aliases.

pub mod aliases;
pub mod values;

pub use aliases::{shared, Shared};
pub use values::{Color, Point, Point3};
