//! Fuzzy c-means on a simple 2D dataset.

use cmeans::{Centroid, FuzzyCMeans, Point};

fn main() {
    // Two groups of integer-grid points, split around x = 3.
    let points: Vec<Point> = vec![
        Point::new(vec![0.0, 4.0]),
        Point::new(vec![0.0, 2.0]),
        Point::new(vec![0.0, 0.0]),
        Point::new(vec![1.0, 3.0]),
        Point::new(vec![1.0, 2.0]),
        Point::new(vec![1.0, 1.0]),
        Point::new(vec![2.0, 2.0]),
        Point::new(vec![3.0, 2.0]),
        Point::new(vec![4.0, 2.0]),
        Point::new(vec![5.0, 3.0]),
        Point::new(vec![5.0, 2.0]),
        Point::new(vec![5.0, 1.0]),
        Point::new(vec![6.0, 4.0]),
        Point::new(vec![6.0, 2.0]),
        Point::new(vec![6.0, 0.0]),
    ];

    let centroids = vec![Centroid::new(vec![1.0, 2.0]), Centroid::new(vec![6.0, 2.0])];

    let mut engine = FuzzyCMeans::new(points, centroids, 2.0).unwrap();
    let iterations = engine.run(1e-5);

    println!("=== Fuzzy c-means (k=2, m=2) ===");
    for (i, point) in engine.points().iter().enumerate() {
        for j in 0..engine.memberships().cols() {
            println!(
                "{:02} Point: ({};{}) ClusterIndex: {} Value: {:.3}",
                i + 1,
                point.coords()[0],
                point.coords()[1],
                point.cluster_index().as_f64(),
                engine.memberships().get(i, j)
            );
        }
    }

    println!("\nIteration count: {}", iterations);

    println!("\n=== Centroid log ===");
    print!("{}", engine.log());
}
