//! Inverse mapping from a dragged anchor back to shape parameters.
//!
//! Every kind is edited symmetrically about its centre: moving a handle by
//! `d` changes the matching dimension by `2d`, and the centre stays put.

use serde::{Deserialize, Serialize};

use shapekit_core::Point;

use crate::anchors::AnchorRole;
use crate::model::{clamp_dimension, ShapeKind};

/// Parameter writes produced by one drag step. `None` fields are untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DragUpdate {
    pub position: Option<Point>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub arc_start: Option<f64>,
    pub arc_stop: Option<f64>,
    /// Free-form vertex index and its new location
    pub vertex: Option<(usize, Point)>,
}

impl DragUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn width(w: f64) -> Self {
        Self {
            width: Some(clamp_dimension(w)),
            ..Self::default()
        }
    }

    fn height(h: f64) -> Self {
        Self {
            height: Some(clamp_dimension(h)),
            ..Self::default()
        }
    }

    fn size(w: f64, h: f64) -> Self {
        Self {
            width: Some(clamp_dimension(w)),
            height: Some(clamp_dimension(h)),
            ..Self::default()
        }
    }
}

/// Wraps an angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Angle of `pointer` around `center`, in degrees within `[0, 360)`.
pub fn pointer_angle(pointer: Point, center: Point) -> f64 {
    normalize_degrees((pointer.y - center.y).atan2(pointer.x - center.x).to_degrees())
}

/// Maps a drag of the `role` anchor to `pointer` onto parameter writes.
///
/// Roles that do not belong to `kind` produce an empty update.
pub fn inverse_map(kind: ShapeKind, role: AnchorRole, pointer: Point, center: Point) -> DragUpdate {
    let span_w = 2.0 * (center.x - pointer.x).abs();
    let span_h = 2.0 * (center.y - pointer.y).abs();

    match (kind, role) {
        (ShapeKind::Freeform, AnchorRole::Vertex(i)) => DragUpdate {
            vertex: Some((i, pointer)),
            ..DragUpdate::default()
        },
        (ShapeKind::Freeform, _) => DragUpdate::default(),
        (_, AnchorRole::Center) => DragUpdate {
            position: Some(pointer),
            ..DragUpdate::default()
        },
        (
            ShapeKind::Rectangle,
            AnchorRole::TopLeft
            | AnchorRole::TopRight
            | AnchorRole::BottomRight
            | AnchorRole::BottomLeft,
        ) => DragUpdate::size(span_w, span_h),
        (
            ShapeKind::Ellipse | ShapeKind::Quad | ShapeKind::Arc,
            AnchorRole::Top | AnchorRole::Bottom,
        ) => DragUpdate::height(span_h),
        (
            ShapeKind::Ellipse | ShapeKind::Quad | ShapeKind::Arc,
            AnchorRole::Left | AnchorRole::Right,
        ) => DragUpdate::width(span_w),
        (ShapeKind::Arc, AnchorRole::ArcStart) => DragUpdate {
            arc_start: Some(pointer_angle(pointer, center)),
            ..DragUpdate::default()
        },
        (ShapeKind::Arc, AnchorRole::ArcStop) => DragUpdate {
            arc_stop: Some(pointer_angle(pointer, center)),
            ..DragUpdate::default()
        },
        (ShapeKind::Triangle, AnchorRole::Top) => DragUpdate::height(span_h),
        (ShapeKind::Triangle, AnchorRole::BottomLeft | AnchorRole::BottomRight) => {
            DragUpdate::size(span_w, span_h)
        }
        (ShapeKind::Line, AnchorRole::Start | AnchorRole::End) => DragUpdate::size(span_w, span_h),
        _ => DragUpdate::default(),
    }
}
