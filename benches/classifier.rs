//! Classifier micro-benchmarks
//!
//! The evaluation path must stay linear in the number of points; these
//! benches watch the bounding-box scan and the triangle dedup pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sketch_judge::analysis::classifier::classify_stroke;
use sketch_judge::capture::types::{Point, ShapeLabel, Stroke};

fn circle_stroke(point_count: usize) -> Stroke {
    let points = (0..point_count)
        .map(|i| {
            let angle = (i as f64 / point_count as f64) * 2.0 * std::f64::consts::PI;
            Point::new(200.0 + 90.0 * angle.cos(), 200.0 + 90.0 * angle.sin())
        })
        .collect();
    Stroke::from_points(points)
}

fn bench_classify(c: &mut Criterion) {
    let small = circle_stroke(64);
    let large = circle_stroke(4096);

    c.bench_function("classify_circle_64pts", |b| {
        b.iter(|| classify_stroke(black_box(&small), ShapeLabel::Circle))
    });

    c.bench_function("classify_circle_4096pts", |b| {
        b.iter(|| classify_stroke(black_box(&large), ShapeLabel::Circle))
    });

    c.bench_function("classify_triangle_dedup_4096pts", |b| {
        b.iter(|| classify_stroke(black_box(&large), ShapeLabel::Triangle))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
