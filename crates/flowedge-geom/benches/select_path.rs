use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use flowedge_geom::{Point, RoutedSection, select_path};
use std::hint::black_box;

fn zigzag(bends: usize) -> Vec<RoutedSection> {
    let pts = (0..bends).map(|i| {
        let x = 40.0 * (i as f64 + 1.0);
        let y = if i % 2 == 0 { 35.0 } else { -35.0 };
        Point::new(x, y)
    });
    let end = Point::new(40.0 * (bends as f64 + 1.0), 0.0);
    vec![RoutedSection::new(Point::new(0.0, 0.0), end).with_bend_points(pts)]
}

fn bench_select_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_path");

    let straight = vec![RoutedSection::new(Point::new(0.0, 0.0), Point::new(320.0, 180.0))];
    group.bench_function("bowed_cubic", |b| {
        b.iter(|| black_box(select_path(black_box(&straight))))
    });

    for bends in [1usize, 8, 64] {
        let sections = zigzag(bends);
        group.bench_with_input(BenchmarkId::new("spline", bends), &sections, |b, s| {
            b.iter(|| black_box(select_path(black_box(s))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select_path);
criterion_main!(benches);
