//! Outline geometry for the 2D drawing backend.
//!
//! Builds `lyon` paths for the active shape plus the background grid and the
//! centre crosshair. The backend only fills and strokes what it is given.

use lyon::geom::Arc;
use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use shapekit_core::Point;

use crate::freeform::FreeformPolygon;
use crate::model::{ArcMode, ShapeKind, ShapeParams};

/// Grid spacing in canvas units.
pub const GRID_STEP: f64 = 50.0;
/// Spacing of the numeric labels along the top and left edges.
pub const GRID_LABEL_STEP: f64 = 100.0;
/// Smallest diameter a point is drawn with.
pub const MIN_POINT_DIAMETER: f64 = 8.0;

fn pt(x: f64, y: f64) -> lyon::math::Point {
    point(x as f32, y as f32)
}

/// Outline of `kind` for the given parameters.
///
/// Line and open arcs produce open sub-paths; everything else is closed.
/// An arc whose start and stop coincide draws nothing.
pub fn outline(kind: ShapeKind, params: &ShapeParams, polygon: &FreeformPolygon) -> Path {
    let Point { x, y } = params.position;
    let hw = params.width() / 2.0;
    let hh = params.height() / 2.0;
    let mut builder = Path::builder();

    match kind {
        ShapeKind::Rectangle => {
            let corners = params.rect_corners();
            builder.begin(pt(corners[0].x, corners[0].y));
            for corner in &corners[1..] {
                builder.line_to(pt(corner.x, corner.y));
            }
            builder.close();
        }
        ShapeKind::Ellipse => {
            builder.add_ellipse(
                pt(x, y),
                vector(hw as f32, hh as f32),
                Angle::radians(0.0),
                Winding::Positive,
            );
        }
        ShapeKind::Triangle => {
            builder.begin(pt(x, y - hh));
            builder.line_to(pt(x - hw, y + hh));
            builder.line_to(pt(x + hw, y + hh));
            builder.close();
        }
        ShapeKind::Line => {
            builder.begin(pt(x - hw, y - hh));
            builder.line_to(pt(x + hw, y + hh));
            builder.end(false);
        }
        ShapeKind::Quad => {
            builder.begin(pt(x, y - hh));
            builder.line_to(pt(x + hw, y));
            builder.line_to(pt(x, y + hh));
            builder.line_to(pt(x - hw, y));
            builder.close();
        }
        ShapeKind::Arc => {
            let raw = params.arc_stop - params.arc_start;
            let sweep = if raw >= 360.0 { 360.0 } else { raw.rem_euclid(360.0) };
            if sweep > 0.0 {
                let arc = Arc {
                    center: pt(x, y),
                    radii: vector(hw as f32, hh as f32),
                    start_angle: Angle::degrees(params.arc_start as f32),
                    sweep_angle: Angle::degrees(sweep as f32),
                    x_rotation: Angle::radians(0.0),
                };
                match params.arc_mode {
                    ArcMode::Pie => {
                        builder.begin(pt(x, y));
                        builder.line_to(arc.from());
                    }
                    ArcMode::Chord | ArcMode::Open => {
                        builder.begin(arc.from());
                    }
                }
                arc.for_each_quadratic_bezier(&mut |segment| {
                    builder.quadratic_bezier_to(segment.ctrl, segment.to);
                });
                match params.arc_mode {
                    ArcMode::Pie | ArcMode::Chord => builder.close(),
                    ArcMode::Open => builder.end(false),
                }
            }
        }
        ShapeKind::Point => {
            let diameter = params.style.stroke_weight.max(MIN_POINT_DIAMETER);
            builder.add_circle(pt(x, y), (diameter / 2.0) as f32, Winding::Positive);
        }
        ShapeKind::Freeform => {
            if let Some((first, rest)) = polygon.vertices().split_first() {
                builder.begin(pt(first.x, first.y));
                for vertex in rest {
                    builder.line_to(pt(vertex.x, vertex.y));
                }
                builder.close();
            }
        }
    }

    builder.build()
}

/// Axis-aligned bounds `(min_x, min_y, max_x, max_y)`, or `None` for an
/// empty path.
pub fn bounds(path: &Path) -> Option<(f64, f64, f64, f64)> {
    path.iter().next()?;
    let bb = lyon::algorithms::aabb::bounding_box(path.iter());
    Some((
        bb.min.x as f64,
        bb.min.y as f64,
        bb.max.x as f64,
        bb.max.y as f64,
    ))
}

/// A straight guide line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Vertical and horizontal grid lines every `step` units, edges included.
pub fn grid_lines(size: f64, step: f64) -> Vec<Segment> {
    if step <= 0.0 || size < 0.0 {
        return Vec::new();
    }
    let count = (size / step).floor() as usize;
    let mut lines = Vec::with_capacity(2 * (count + 1));
    for i in 0..=count {
        let at = i as f64 * step;
        lines.push(Segment::new(Point::new(at, 0.0), Point::new(at, size)));
        lines.push(Segment::new(Point::new(0.0, at), Point::new(size, at)));
    }
    lines
}

/// A numeric coordinate label drawn on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLabel {
    pub text: String,
    pub anchor: Point,
}

/// Labels along the top edge (from 0) and down the left edge (from one
/// step), every [`GRID_LABEL_STEP`] units.
pub fn grid_labels(size: f64) -> Vec<GridLabel> {
    let count = (size / GRID_LABEL_STEP).floor() as usize;
    let mut labels = Vec::new();
    for i in 0..=count {
        let at = i as f64 * GRID_LABEL_STEP;
        labels.push(GridLabel {
            text: format!("{}", at as i64),
            anchor: Point::new(at, 2.0),
        });
    }
    for i in 1..=count {
        let at = i as f64 * GRID_LABEL_STEP;
        labels.push(GridLabel {
            text: format!("{}", at as i64),
            anchor: Point::new(2.0, at),
        });
    }
    labels
}

/// Vertical and horizontal guide lines through `position`, spanning the canvas.
pub fn crosshair(position: Point, size: f64) -> [Segment; 2] {
    [
        Segment::new(Point::new(position.x, 0.0), Point::new(position.x, size)),
        Segment::new(Point::new(0.0, position.y), Point::new(size, position.y)),
    ]
}
