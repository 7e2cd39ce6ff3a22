//! Fuzzy clustering of dense vectors.
//!
//! ## Hard vs Soft Clustering
//!
//! **Hard clustering** (k-means, DBSCAN) assigns each item to exactly one
//! cluster. Simple, but loses information when items genuinely span multiple
//! groups.
//!
//! **Soft clustering** gives each item a degree of membership in every
//! cluster. A point halfway between two groups is 50% in each rather than
//! arbitrarily forced into one. This crate implements fuzzy c-means, the
//! classic soft counterpart of k-means.
//!
//! ## Fuzzy c-means
//!
//! Starting from caller-supplied centroid positions, the engine alternates
//! two updates until its objective function stabilizes:
//!
//! 1. Move each centroid to the membership-weighted mean of all points.
//! 2. Recompute each point's memberships from its distances to the centroids.
//!
//! The fuzzyness factor `m > 1` controls how soft the partition is: `m`
//! close to 1 behaves like hard k-means, larger values blur the boundaries.
//! See [`fcm`] for the update formulas and the numerical conventions this
//! implementation follows.
//!
//! ## Usage
//!
//! ```rust
//! use cmeans::{Centroid, ClusterIndex, FuzzyCMeans, Point};
//!
//! let points: Vec<Point> = vec![
//!     Point::new(vec![0.0, 0.0]),
//!     Point::new(vec![0.0, 1.0]),
//!     Point::new(vec![10.0, 10.0]),
//!     Point::new(vec![10.0, 11.0]),
//! ];
//! let centroids = vec![
//!     Centroid::new(vec![0.0, 0.0]),
//!     Centroid::new(vec![10.0, 10.0]),
//! ];
//!
//! let mut engine = FuzzyCMeans::new(points, centroids, 2.0).unwrap();
//! let iterations = engine.run(1e-5);
//! assert!((1..=20).contains(&iterations));
//!
//! // First point belongs firmly to the first cluster...
//! assert!(engine.memberships().get(0, 0) > 0.5);
//! // ...and its hard assignment agrees.
//! assert_eq!(engine.points()[0].cluster_index(), ClusterIndex::Cluster(0));
//! ```

pub mod fcm;
mod point;
mod util;

pub use fcm::{FuzzyCMeans, Membership};
pub use point::{Centroid, ClusterIndex, Point};
