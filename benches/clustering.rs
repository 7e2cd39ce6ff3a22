use cmeans::{Centroid, FuzzyCMeans, Point};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn bench_fcm(c: &mut Criterion) {
    let mut group = c.benchmark_group("fcm");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let d = 16;
    let k = 10;

    let coords: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f64>() * 100.0).collect())
        .collect();
    let centers: Vec<Vec<f64>> = coords.iter().take(k).cloned().collect();

    group.bench_function("run_n1000_d16_k10", |b| {
        b.iter(|| {
            let points: Vec<Point> = coords.iter().map(|c| Point::new(c.clone())).collect();
            let centroids: Vec<Centroid> =
                centers.iter().map(|c| Centroid::new(c.clone())).collect();
            let mut engine = FuzzyCMeans::new(points, centroids, 2.0).unwrap();
            engine.run(black_box(1e-3))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fcm);
criterion_main!(benches);
