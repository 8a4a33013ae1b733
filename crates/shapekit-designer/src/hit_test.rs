//! Pointer hit-testing against anchors and polygon edges.

use serde::{Deserialize, Serialize};

use shapekit_core::Point;

use crate::anchors::Anchor;

pub use shapekit_core::config::{DEFAULT_ANCHOR_HIT_RADIUS, DEFAULT_EDGE_HIT_DISTANCE};

/// Insertions are only accepted this far (in `t`) from either edge end.
pub const EDGE_T_MARGIN: f64 = 0.1;

/// Index of the first anchor strictly closer than `radius` to `p`.
///
/// Anchors are scanned in array order and the first match wins even when a
/// later anchor is nearer.
pub fn nearest_anchor(anchors: &[Anchor], p: Point, radius: f64) -> Option<usize> {
    anchors
        .iter()
        .position(|anchor| anchor.position.distance_to(&p) < radius)
}

/// Result of projecting a point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentProjection {
    /// Distance from the point to `nearest`
    pub distance: f64,
    /// Position along the segment, in `[0, 1]`
    pub t: f64,
    /// Closest point on the segment
    pub nearest: Point,
}

/// Distance from `p` to segment `a`-`b`.
///
/// A zero-length segment projects onto its start.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> SegmentProjection {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    let raw = if len_sq != 0.0 {
        ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq
    } else {
        -1.0
    };
    let t = raw.clamp(0.0, 1.0);
    let nearest = Point::new(a.x + t * dx, a.y + t * dy);

    SegmentProjection {
        distance: p.distance_to(&nearest),
        t,
        nearest,
    }
}

/// A polygon edge close enough to the pointer to take a new vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeHit {
    /// Edge `edge_index -> edge_index + 1` (wrapping)
    pub edge_index: usize,
    pub t: f64,
    /// Projected point on the edge
    pub point: Point,
}

/// First edge of the closed polygon within `max_distance` of `p` whose
/// projection lies strictly inside the edge margins.
pub fn nearest_edge(vertices: &[Point], p: Point, max_distance: f64) -> Option<EdgeHit> {
    let n = vertices.len();
    if n < 2 {
        return None;
    }

    (0..n).find_map(|i| {
        let projection = point_to_segment_distance(p, vertices[i], vertices[(i + 1) % n]);
        let inside = projection.t > EDGE_T_MARGIN && projection.t < 1.0 - EDGE_T_MARGIN;
        (projection.distance < max_distance && inside).then_some(EdgeHit {
            edge_index: i,
            t: projection.t,
            point: projection.nearest,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::AnchorRole;

    fn square() -> Vec<Point> {
        vec![
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(200.0, 200.0),
            Point::new(100.0, 200.0),
        ]
    }

    #[test]
    fn test_first_match_wins() {
        let anchors = [
            Anchor::new(100.0, 100.0, AnchorRole::Center),
            Anchor::new(108.0, 100.0, AnchorRole::Right),
        ];
        // closer to the second anchor, but the first is still inside the radius
        assert_eq!(nearest_anchor(&anchors, Point::new(107.0, 100.0), 15.0), Some(0));
    }

    #[test]
    fn test_radius_is_exclusive() {
        let anchors = [Anchor::new(0.0, 0.0, AnchorRole::Center)];
        assert_eq!(nearest_anchor(&anchors, Point::new(15.0, 0.0), 15.0), None);
        assert_eq!(nearest_anchor(&anchors, Point::new(14.9, 0.0), 15.0), Some(0));
    }

    #[test]
    fn test_segment_projection() {
        let mid = point_to_segment_distance(
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
        );
        assert!(mid.distance.abs() < 1e-9);
        assert!((mid.t - 0.5).abs() < 1e-9);

        let before = point_to_segment_distance(
            Point::new(-5.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(before.t, 0.0);
        assert_eq!(before.nearest, Point::new(0.0, 0.0));

        let after = point_to_segment_distance(
            Point::new(15.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(after.t, 1.0);
        assert_eq!(after.nearest, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_degenerate_segment() {
        let a = Point::new(3.0, 4.0);
        let projection = point_to_segment_distance(Point::new(0.0, 0.0), a, a);
        assert_eq!(projection.t, 0.0);
        assert_eq!(projection.nearest, a);
        assert!((projection.distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_edge_hit_and_margins() {
        let vertices = square();

        let hit = nearest_edge(&vertices, Point::new(150.0, 104.0), 10.0).unwrap();
        assert_eq!(hit.edge_index, 0);
        assert_eq!(hit.point, Point::new(150.0, 100.0));

        // closing edge wraps back to vertex 0
        let hit = nearest_edge(&vertices, Point::new(98.0, 150.0), 10.0).unwrap();
        assert_eq!(hit.edge_index, 3);

        // too close to a corner
        assert!(nearest_edge(&vertices, Point::new(105.0, 100.0), 10.0).is_none());
        // too far from any edge
        assert!(nearest_edge(&vertices, Point::new(150.0, 150.0), 10.0).is_none());
    }

    #[test]
    fn test_edge_needs_two_vertices() {
        assert!(nearest_edge(&[Point::new(0.0, 0.0)], Point::new(0.0, 0.0), 10.0).is_none());
    }
}
