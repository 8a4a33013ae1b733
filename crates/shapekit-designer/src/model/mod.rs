//! Shape model: the semantic parameters the editor manipulates.

mod kind;
mod params;
mod solid;

pub use kind::{ShapeControls, ShapeKind};
pub use params::{ArcMode, ShapeParams, Style};
pub use solid::{
    Lighting, Material, MaterialKind, SolidKind, SolidParams, SolidPrimitive, SolidStroke,
};

/// Smallest width, height or solid dimension that is ever stored.
pub const MIN_DIMENSION: f64 = 1.0;

/// Floors a dimension at [`MIN_DIMENSION`]. NaN also maps to the minimum.
pub fn clamp_dimension(value: f64) -> f64 {
    if value >= MIN_DIMENSION {
        value
    } else {
        MIN_DIMENSION
    }
}
