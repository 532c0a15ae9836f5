// Criterion benchmarks for Nearby Cases

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nearby_cases::core::{
    distance::{bounding_box, haversine_distance},
    proximity::{within_radius, ProximityFilter},
};
use nearby_cases::models::GeoPoint;

fn scatter(count: usize) -> Vec<GeoPoint> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.0137) % 1.0 - 0.5;
            let lon_offset = (i as f64 * 0.0071) % 1.0 - 0.5;
            GeoPoint::new(28.6139 + lat_offset, 77.2090 + lon_offset).unwrap()
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(28.6139),
                black_box(77.2090),
                black_box(28.7041),
                black_box(77.1025),
            )
        });
    });
}

fn bench_bounding_box(c: &mut Criterion) {
    let center = GeoPoint::new(28.6139, 77.2090).unwrap();

    c.bench_function("bounding_box_calculation", |b| {
        b.iter(|| bounding_box(black_box(center), black_box(10.0)));
    });
}

fn bench_proximity(c: &mut Criterion) {
    let center = GeoPoint::new(28.6139, 77.2090).unwrap();
    let filter = ProximityFilter::default();

    let mut group = c.benchmark_group("proximity");

    for count in [10, 100, 1000, 10000].iter() {
        let points = scatter(*count);

        group.bench_with_input(BenchmarkId::new("within_radius", count), count, |b, _| {
            b.iter(|| within_radius(black_box(points.as_slice()), black_box(center), black_box(10.0)));
        });

        group.bench_with_input(BenchmarkId::new("search_prefiltered", count), count, |b, _| {
            b.iter(|| filter.search(black_box(points.as_slice()), black_box(center), black_box(Some(10.0))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_bounding_box,
    bench_proximity
);

criterion_main!(benches);
