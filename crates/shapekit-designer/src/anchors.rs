//! Anchor derivation.
//!
//! Anchors are the draggable control points drawn on top of the shape. They
//! are a pure function of the current parameters and are recomputed for
//! every frame and before every hit test; nothing here is cached.
//!
//! Offsets are measured from the shape centre `(x, y)` with y growing
//! downward, so "top" is at `y - h/2`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use shapekit_core::Point;

use crate::model::ShapeKind;

/// Semantic meaning of an anchor; selects the inverse mapping applied when
/// it is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorRole {
    Center,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Top,
    Right,
    Bottom,
    Left,
    /// First endpoint of a line
    Start,
    /// Second endpoint of a line
    End,
    ArcStart,
    ArcStop,
    /// Free-form polygon vertex at this index
    Vertex(usize),
}

impl fmt::Display for AnchorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Center => write!(f, "center"),
            Self::TopLeft => write!(f, "topLeft"),
            Self::TopRight => write!(f, "topRight"),
            Self::BottomRight => write!(f, "bottomRight"),
            Self::BottomLeft => write!(f, "bottomLeft"),
            Self::Top => write!(f, "top"),
            Self::Right => write!(f, "right"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
            Self::ArcStart => write!(f, "arcStart"),
            Self::ArcStop => write!(f, "arcStop"),
            Self::Vertex(i) => write!(f, "vertex{}", i),
        }
    }
}

/// A draggable control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Point,
    pub role: AnchorRole,
}

impl Anchor {
    pub fn new(x: f64, y: f64, role: AnchorRole) -> Self {
        Self {
            position: Point::new(x, y),
            role,
        }
    }
}

/// Anchor list; parametric shapes fit inline, free-form polygons may spill.
pub type Anchors = SmallVec<[Anchor; 8]>;

/// Inputs beyond centre and size that some kinds need.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorExtras<'a> {
    /// Arc start angle in degrees
    pub arc_start: f64,
    /// Arc stop angle in degrees
    pub arc_stop: f64,
    /// Free-form polygon vertices
    pub vertices: &'a [Point],
}

/// Point on the `(w/2, h/2)` ellipse around `(x, y)` at `degrees`.
///
/// The angle handles sit on this ellipse, so they are only equidistant from
/// the centre when `w == h`.
pub fn angle_handle_position(x: f64, y: f64, w: f64, h: f64, degrees: f64) -> Point {
    let theta = degrees.to_radians();
    Point::new(x + theta.cos() * w / 2.0, y + theta.sin() * h / 2.0)
}

/// Computes the ordered anchor set for a shape.
///
/// | kind | anchors |
/// |---|---|
/// | rectangle | center, topLeft, topRight, bottomRight, bottomLeft |
/// | ellipse, quad | center, top, right, bottom, left |
/// | arc | as ellipse, then arcStart, arcStop |
/// | triangle | center, top, bottomLeft, bottomRight |
/// | line | center, start, end |
/// | point | center |
/// | freeform | one vertex anchor per polygon vertex |
pub fn compute_anchors(
    kind: ShapeKind,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    extra: AnchorExtras<'_>,
) -> Anchors {
    let hw = w / 2.0;
    let hh = h / 2.0;
    let mut anchors = Anchors::new();

    if kind == ShapeKind::Freeform {
        anchors.extend(
            extra
                .vertices
                .iter()
                .enumerate()
                .map(|(i, v)| Anchor::new(v.x, v.y, AnchorRole::Vertex(i))),
        );
        return anchors;
    }

    anchors.push(Anchor::new(x, y, AnchorRole::Center));

    match kind {
        ShapeKind::Rectangle => {
            anchors.push(Anchor::new(x - hw, y - hh, AnchorRole::TopLeft));
            anchors.push(Anchor::new(x + hw, y - hh, AnchorRole::TopRight));
            anchors.push(Anchor::new(x + hw, y + hh, AnchorRole::BottomRight));
            anchors.push(Anchor::new(x - hw, y + hh, AnchorRole::BottomLeft));
        }
        ShapeKind::Ellipse | ShapeKind::Quad | ShapeKind::Arc => {
            anchors.push(Anchor::new(x, y - hh, AnchorRole::Top));
            anchors.push(Anchor::new(x + hw, y, AnchorRole::Right));
            anchors.push(Anchor::new(x, y + hh, AnchorRole::Bottom));
            anchors.push(Anchor::new(x - hw, y, AnchorRole::Left));

            if kind == ShapeKind::Arc {
                let start = angle_handle_position(x, y, w, h, extra.arc_start);
                let stop = angle_handle_position(x, y, w, h, extra.arc_stop);
                anchors.push(Anchor::new(start.x, start.y, AnchorRole::ArcStart));
                anchors.push(Anchor::new(stop.x, stop.y, AnchorRole::ArcStop));
            }
        }
        ShapeKind::Triangle => {
            anchors.push(Anchor::new(x, y - hh, AnchorRole::Top));
            anchors.push(Anchor::new(x - hw, y + hh, AnchorRole::BottomLeft));
            anchors.push(Anchor::new(x + hw, y + hh, AnchorRole::BottomRight));
        }
        ShapeKind::Line => {
            anchors.push(Anchor::new(x - hw, y - hh, AnchorRole::Start));
            anchors.push(Anchor::new(x + hw, y + hh, AnchorRole::End));
        }
        ShapeKind::Point | ShapeKind::Freeform => {}
    }

    anchors
}
