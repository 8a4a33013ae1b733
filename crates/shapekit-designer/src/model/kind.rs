use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shapekit_core::EditorError;

/// The 2D primitives the editor can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
    Triangle,
    Line,
    Quad,
    Arc,
    Point,
    Freeform,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Triangle,
        ShapeKind::Line,
        ShapeKind::Quad,
        ShapeKind::Arc,
        ShapeKind::Point,
        ShapeKind::Freeform,
    ];

    /// Which control groups apply to this kind.
    pub fn controls(&self) -> ShapeControls {
        let (dimensions, arc, fill) = match self {
            Self::Rectangle | Self::Ellipse | Self::Triangle | Self::Quad => (true, false, true),
            Self::Line => (true, false, false),
            Self::Arc => (true, true, true),
            Self::Point => (false, false, false),
            Self::Freeform => (false, false, true),
        };
        ShapeControls {
            dimensions,
            arc,
            fill,
            freeform: *self == Self::Freeform,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Triangle => "triangle",
            Self::Line => "line",
            Self::Quad => "quad",
            Self::Arc => "arc",
            Self::Point => "point",
            Self::Freeform => "freeform",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s.trim().to_lowercase())
            .ok_or_else(|| EditorError::UnknownShapeKind {
                name: s.to_string(),
            })
    }
}

/// Visibility of the control groups for a shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeControls {
    /// Width/height sliders
    pub dimensions: bool,
    /// Arc start/stop sliders and arc mode picker
    pub arc: bool,
    /// Fill colour picker
    pub fill: bool,
    /// Free-form reset button
    pub freeform: bool,
}
