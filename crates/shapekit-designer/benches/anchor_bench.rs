use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shapekit_core::Point;
use shapekit_designer::{
    compute_anchors, nearest_anchor, nearest_edge, AnchorExtras, FreeformPolygon, ShapeKind,
};

fn bench_anchors(c: &mut Criterion) {
    c.bench_function("compute_anchors_arc", |b| {
        b.iter(|| {
            compute_anchors(
                black_box(ShapeKind::Arc),
                black_box(200.0),
                black_box(200.0),
                black_box(100.0),
                black_box(80.0),
                AnchorExtras {
                    arc_start: 0.0,
                    arc_stop: 90.0,
                    vertices: &[],
                },
            )
        })
    });

    c.bench_function("hit_test_rectangle", |b| {
        let anchors = compute_anchors(
            ShapeKind::Rectangle,
            200.0,
            200.0,
            100.0,
            100.0,
            AnchorExtras::default(),
        );
        b.iter(|| nearest_anchor(black_box(&anchors), black_box(Point::new(251.0, 249.0)), 15.0))
    });

    c.bench_function("nearest_edge_64", |b| {
        let mut polygon = FreeformPolygon::from_rect(Point::new(200.0, 200.0), 300.0, 300.0);
        for i in 0..60 {
            let edge = i % polygon.len();
            let (a, z) = polygon.edges().nth(edge).unwrap_or_default();
            polygon.insert_vertex(edge, Point::new((a.x + z.x) / 2.0, (a.y + z.y) / 2.0));
        }
        b.iter(|| nearest_edge(black_box(polygon.vertices()), black_box(Point::new(52.0, 300.0)), 10.0))
    });
}

criterion_group!(benches, bench_anchors);
criterion_main!(benches);
