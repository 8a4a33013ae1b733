//! Anchor derivation for every shape kind.

use shapekit_core::Point;
use shapekit_designer::{compute_anchors, AnchorExtras, AnchorRole, ShapeKind};

fn extras(vertices: &[Point]) -> AnchorExtras<'_> {
    AnchorExtras {
        arc_start: 0.0,
        arc_stop: 90.0,
        vertices,
    }
}

#[test]
fn test_anchor_counts_per_kind() {
    let vertices = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(5.0, 15.0),
        Point::new(0.0, 10.0),
    ];
    let expected = [
        (ShapeKind::Rectangle, 5),
        (ShapeKind::Ellipse, 5),
        (ShapeKind::Triangle, 4),
        (ShapeKind::Line, 3),
        (ShapeKind::Quad, 5),
        (ShapeKind::Arc, 7),
        (ShapeKind::Point, 1),
        (ShapeKind::Freeform, 5),
    ];

    for (kind, count) in expected {
        let anchors = compute_anchors(kind, 200.0, 200.0, 100.0, 100.0, extras(&vertices));
        assert_eq!(anchors.len(), count, "{} should have {} anchors", kind, count);
    }
}

#[test]
fn test_rectangle_corners() {
    let anchors = compute_anchors(
        ShapeKind::Rectangle,
        200.0,
        200.0,
        100.0,
        100.0,
        extras(&[]),
    );
    let expected = [
        (AnchorRole::Center, Point::new(200.0, 200.0)),
        (AnchorRole::TopLeft, Point::new(150.0, 150.0)),
        (AnchorRole::TopRight, Point::new(250.0, 150.0)),
        (AnchorRole::BottomRight, Point::new(250.0, 250.0)),
        (AnchorRole::BottomLeft, Point::new(150.0, 250.0)),
    ];
    for (anchor, (role, position)) in anchors.iter().zip(expected) {
        assert_eq!(anchor.role, role);
        assert_eq!(anchor.position, position);
    }
}

#[test]
fn test_arc_handles_on_circle() {
    let anchors = compute_anchors(ShapeKind::Arc, 200.0, 200.0, 100.0, 100.0, extras(&[]));
    let start = anchors
        .iter()
        .find(|a| a.role == AnchorRole::ArcStart)
        .unwrap();
    let stop = anchors
        .iter()
        .find(|a| a.role == AnchorRole::ArcStop)
        .unwrap();

    assert!(start.position.distance_to(&Point::new(250.0, 200.0)) < 1e-9);
    assert!(stop.position.distance_to(&Point::new(200.0, 250.0)) < 1e-9);
}

#[test]
fn test_quad_matches_ellipse_layout() {
    let quad = compute_anchors(ShapeKind::Quad, 120.0, 80.0, 40.0, 20.0, extras(&[]));
    let ellipse = compute_anchors(ShapeKind::Ellipse, 120.0, 80.0, 40.0, 20.0, extras(&[]));
    assert_eq!(quad, ellipse);
}

#[test]
fn test_point_only_has_center() {
    let anchors = compute_anchors(ShapeKind::Point, 10.0, 20.0, 100.0, 100.0, extras(&[]));
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors[0].role, AnchorRole::Center);
    assert_eq!(anchors[0].position, Point::new(10.0, 20.0));
}

#[test]
fn test_anchor_json_for_backend() {
    let vertices = [Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)];
    let anchors = compute_anchors(ShapeKind::Freeform, 0.0, 0.0, 1.0, 1.0, extras(&vertices));
    let json = serde_json::to_value(anchors[2]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"position": {"x": 5.0, "y": 6.0}, "role": {"Vertex": 2}})
    );
}
