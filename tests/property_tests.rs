use cmeans::{Centroid, FuzzyCMeans, Point};
use proptest::prelude::*;

fn build_engine(
    coords: &[Vec<f64>],
    centers: &[Vec<f64>],
    fuzzyness: f64,
) -> FuzzyCMeans {
    let points: Vec<Point> = coords.iter().map(|c| Point::new(c.clone())).collect();
    let centroids: Vec<Centroid> = centers.iter().map(|c| Centroid::new(c.clone())).collect();
    FuzzyCMeans::new(points, centroids, fuzzyness).unwrap()
}

proptest! {
    #[test]
    fn prop_rows_sum_to_one_and_stay_in_range(
        coords in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..20),
        centers in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..4),
        fuzzyness in 1.5f64..4.0,
    ) {
        let mut engine = build_engine(&coords, &centers, fuzzyness);

        // The fuzzy-partition invariant holds after initialization...
        for i in 0..engine.memberships().rows() {
            let row = engine.memberships().row(i);
            let sum: f64 = row.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            for &u in row {
                prop_assert!((0.0..=1.0).contains(&u));
            }
        }

        // ...and after every step.
        for _ in 0..3 {
            engine.step();
            for i in 0..engine.memberships().rows() {
                let row = engine.memberships().row(i);
                let sum: f64 = row.iter().sum();
                prop_assert!((sum - 1.0).abs() < 1e-9);
                for &u in row {
                    prop_assert!((0.0..=1.0).contains(&u));
                }
            }
        }
    }

    #[test]
    fn prop_run_is_bounded(
        coords in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..20),
        centers in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..4),
    ) {
        let mut engine = build_engine(&coords, &centers, 2.0);
        let iterations = engine.run(1e-4);
        prop_assert!((1..=20).contains(&iterations));
    }

    #[test]
    fn prop_run_is_deterministic(
        coords in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..20),
        centers in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..4),
        fuzzyness in 1.5f64..4.0,
    ) {
        let mut a = build_engine(&coords, &centers, fuzzyness);
        let mut b = build_engine(&coords, &centers, fuzzyness);

        prop_assert_eq!(a.run(1e-4), b.run(1e-4));
        for i in 0..a.memberships().rows() {
            prop_assert_eq!(a.memberships().row(i), b.memberships().row(i));
        }
        prop_assert_eq!(a.log(), b.log());
    }
}
