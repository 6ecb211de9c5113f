//! Benchmarks for straight skeleton construction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use skeletum::{skeletonize, Point2, SkeletonGraph};

const NO_HOLES: &[Vec<Point2<f64>>] = &[];

/// Regular polygon with a small deterministic wobble on the radius, so that
/// events do not all coincide.
fn generate_ngon(n: usize) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            let radius = 10.0 + ((i * 17) % 10) as f64 / 100.0;
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Comb with `teeth` unit-wide teeth; every gap adds two reflex vertices.
fn generate_comb(teeth: usize) -> Vec<Point2<f64>> {
    let mut points = vec![
        Point2::new(0.0, 0.0),
        Point2::new((2 * teeth - 1) as f64, 0.0),
    ];

    for t in (0..teeth).rev() {
        let x = (2 * t) as f64;
        points.push(Point2::new(x + 1.0, 3.0));
        points.push(Point2::new(x, 3.0));
        if t > 0 {
            points.push(Point2::new(x, 1.0));
            points.push(Point2::new(x - 1.0, 1.0));
        }
    }

    points
}

fn bench_convex(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton_ngon");

    for n in [8, 32, 128, 512] {
        let polygon = generate_ngon(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), &polygon, |b, poly| {
            b.iter(|| skeletonize(black_box(poly), black_box(NO_HOLES)))
        });
    }

    group.finish();
}

fn bench_comb(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton_comb");

    for teeth in [4, 16, 64] {
        let polygon = generate_comb(teeth);
        group.throughput(Throughput::Elements(polygon.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(teeth), &polygon, |b, poly| {
            b.iter(|| skeletonize(black_box(poly), black_box(NO_HOLES)))
        });
    }

    group.finish();
}

fn bench_with_hole(c: &mut Criterion) {
    let outer = generate_ngon(64);
    let hole: Vec<Point2<f64>> = generate_ngon(16)
        .into_iter()
        .rev()
        .map(|p| Point2::new(p.x * 0.3, p.y * 0.3))
        .collect();
    let holes = vec![hole];

    c.bench_function("skeleton_ngon_with_hole", |b| {
        b.iter(|| skeletonize(black_box(&outer), black_box(&holes)))
    });
}

fn bench_graph(c: &mut Criterion) {
    let Ok(subtrees) = skeletonize(&generate_comb(64), &[]) else {
        return;
    };

    c.bench_function("skeleton_graph_comb_64", |b| {
        b.iter(|| SkeletonGraph::from_subtrees(black_box(&subtrees)))
    });
}

criterion_group!(benches, bench_convex, bench_comb, bench_with_hole, bench_graph);
criterion_main!(benches);
