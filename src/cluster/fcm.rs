//! Fuzzy c-means: soft partitioning of dense vectors.
//!
//! # The Algorithm (Dunn 1973, Bezdek 1981)
//!
//! Fuzzy c-means (FCM) generalizes k-means by replacing hard assignments with
//! a membership matrix `U`: `U[i][j]` is the degree (in `[0, 1]`) to which
//! point `i` belongs to cluster `j`, and each row sums to 1.
//!
//! **Objective**: minimize the weighted within-cluster sum of squares:
//!
//! ```text
//! J = Σ_i Σ_j U[i][j]^m · ||x_i - c_j||²
//! ```
//!
//! where `m > 1` is the fuzzyness factor. As `m → 1` the partition approaches
//! hard k-means; larger `m` spreads membership across clusters.
//!
//! ## Iteration
//!
//! 1. Recompute each centroid as the mean of all points weighted by
//!    `U[i][j]^m`.
//! 2. Recompute `U` from the new centroid positions:
//!    `U[i][j] = 1 / Σ_k (d(i,j) / d(i,k))^(2/(m-1))`.
//! 3. Stop when the objective changes by less than the requested accuracy,
//!    or after the fixed iteration cap.
//!
//! ## Numerical conventions
//!
//! This implementation reproduces the behavior of the reference it was
//! validated against, including two conventions worth knowing about:
//!
//! - Centroid coordinates are truncated to integers after every update, so
//!   centroids always land on the integer grid. Suitable for integer-grid
//!   datasets (the reference's domain); not a general-purpose choice.
//! - During the membership update, any point-to-centroid distance below 1.0
//!   is clamped to a small epsilon. This guards the division at `d = 0` and
//!   makes sub-unit distances behave as "on top of the centroid".
//!
//! The objective function always uses exact (unclamped) distances.
//!
//! ## Complexity
//!
//! - **Time**: O(n·k·d) per iteration, bounded by the iteration cap.
//! - **Space**: O(n·k) for the membership matrix.
//!
//! ## When to use
//!
//! - Points genuinely span multiple groups and a hard label loses information
//! - The number of clusters is known and initial centroid guesses exist
//! - Clusters are roughly spherical (same assumption as k-means)

use std::fmt::Write as _;

use super::point::{Centroid, ClusterIndex, Point};
use super::util::euclidean;
use crate::error::{Error, Result};

/// Substitute for degenerate distances.
const EPSILON: f64 = 1e-5;

/// Distances below this are clamped to [`EPSILON`] during membership updates.
const DISTANCE_FLOOR: f64 = 1.0;

/// Hard safety bound on [`FuzzyCMeans::run`], regardless of accuracy.
const MAX_ITERATIONS: usize = 20;

/// Dense row-major membership matrix.
///
/// Rows are points, columns are clusters. Owned by the engine; callers get a
/// read-only view and must not assume values persist across steps.
#[derive(Clone, Debug)]
pub struct Membership {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Membership {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows (points).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (clusters).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Membership of point `i` in cluster `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j]
    }

    /// The full membership row for point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }
}

/// Fuzzy c-means engine.
///
/// Owns the point set, the centroid set, and the membership matrix for the
/// duration of a run. Construct with [`FuzzyCMeans::new`], then either drive
/// iterations manually with [`step`](FuzzyCMeans::step) or let
/// [`run`](FuzzyCMeans::run) iterate to convergence.
///
/// The type parameter `T` is an opaque per-point tag the engine never
/// inspects; see [`Point::with_tag`].
#[derive(Clone, Debug)]
pub struct FuzzyCMeans<T = ()> {
    points: Vec<Point<T>>,
    centroids: Vec<Centroid>,
    memberships: Membership,
    fuzzyness: f64,
    log: String,
}

impl<T> FuzzyCMeans<T> {
    /// Create an engine from points, initial centroids, and a fuzzyness
    /// factor, and compute the initial membership matrix.
    ///
    /// # Arguments
    ///
    /// * `points` - Non-empty set of points, all of the same dimensionality.
    /// * `centroids` - Non-empty initial centroid positions, same
    ///   dimensionality as the points.
    /// * `fuzzyness` - The factor `m`; must be strictly greater than 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if either collection is empty,
    /// [`Error::InvalidParameter`] if `fuzzyness <= 1`, and
    /// [`Error::DimensionMismatch`] if any point or centroid disagrees with
    /// the dimensionality of the first point.
    pub fn new(points: Vec<Point<T>>, centroids: Vec<Centroid>, fuzzyness: f64) -> Result<Self> {
        if points.is_empty() || centroids.is_empty() {
            return Err(Error::EmptyInput);
        }

        // Also rejects NaN.
        if fuzzyness.is_nan() || fuzzyness <= 1.0 {
            return Err(Error::InvalidParameter {
                name: "fuzzyness",
                message: "must be greater than 1",
            });
        }

        let dim = points[0].coords().len();
        for p in &points {
            if p.coords().len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: p.coords().len(),
                });
            }
        }
        for c in &centroids {
            if c.coords().len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: c.coords().len(),
                });
            }
        }

        let memberships = Membership::new(points.len(), centroids.len());
        let mut engine = Self {
            points,
            centroids,
            memberships,
            fuzzyness,
            log: String::new(),
        };

        engine.initialize_memberships();
        engine.recalculate_cluster_indexes();

        Ok(engine)
    }

    /// Seed the membership matrix from raw point-to-centroid distances.
    ///
    /// This is the reference seeding pass, reproduced stage for stage: store
    /// distances (exact zeros replaced by epsilon), turn them into raw
    /// memberships via `1 / (d / Σd)^(2/(m-1))`, then normalize the row by
    /// its sum. The second normalization is not redundant with the formula;
    /// collapsing the two stages changes the seed values.
    fn initialize_memberships(&mut self) {
        let exponent = 2.0 / (self.fuzzyness - 1.0);

        for i in 0..self.points.len() {
            let row = self.memberships.row_mut(i);

            let mut sum = 0.0;
            for (j, centroid) in self.centroids.iter().enumerate() {
                let d = euclidean(self.points[i].coords(), centroid.coords());
                row[j] = if d == 0.0 { EPSILON } else { d };
                sum += row[j];
            }

            let mut sum2 = 0.0;
            for u in row.iter_mut() {
                *u = 1.0 / (*u / sum).powf(exponent);
                sum2 += *u;
            }

            for u in row.iter_mut() {
                *u /= sum2;
            }
        }
    }

    /// Reassign every point to its maximum-membership cluster.
    ///
    /// A maximum membership of exactly 0.5 is stored as [`ClusterIndex::Tied`]
    /// rather than a concrete cluster: the point sits exactly between two
    /// centroids and the assignment would be arbitrary.
    fn recalculate_cluster_indexes(&mut self) {
        for (i, point) in self.points.iter_mut().enumerate() {
            let row = self.memberships.row(i);

            let mut max = -1.0;
            let mut best = 0;
            for (j, &u) in row.iter().enumerate() {
                if u > max {
                    max = u;
                    best = j;
                }
            }

            let idx = if max == 0.5 {
                ClusterIndex::Tied
            } else {
                ClusterIndex::Cluster(best)
            };
            point.set_cluster_index(idx);
        }
    }

    /// Perform one membership update against the current centroid positions.
    ///
    /// Recomputes the full membership matrix with the standard FCM update
    /// rule and reassigns every point's cluster index. Centroids are not
    /// moved; that happens inside [`run`](FuzzyCMeans::run).
    pub fn step(&mut self) {
        let exponent = 2.0 / (self.fuzzyness - 1.0);
        let mut dists = vec![0.0; self.centroids.len()];

        for i in 0..self.points.len() {
            for (j, centroid) in self.centroids.iter().enumerate() {
                let d = euclidean(self.points[i].coords(), centroid.coords());
                dists[j] = if d < DISTANCE_FLOOR { EPSILON } else { d };
            }

            let row = self.memberships.row_mut(i);
            for (j, u) in row.iter_mut().enumerate() {
                let sum_terms: f64 = dists.iter().map(|&d| (dists[j] / d).powf(exponent)).sum();
                *u = 1.0 / sum_terms;
            }
        }

        self.recalculate_cluster_indexes();
    }

    /// Move every centroid to the `U^m`-weighted mean of the points, truncated
    /// to integer coordinates.
    ///
    /// Appends one `Cluster Centroid: (..)` line per cluster to the run log.
    fn update_centroids(&mut self) {
        let dim = self.points[0].coords().len();

        for (j, centroid) in self.centroids.iter_mut().enumerate() {
            let mut weighted = vec![0.0; dim];
            let mut weight_sum = 0.0;

            for (i, point) in self.points.iter().enumerate() {
                let u = self.memberships.get(i, j).powf(self.fuzzyness);
                for (w, &x) in weighted.iter_mut().zip(point.coords()) {
                    *w += u * x;
                }
                weight_sum += u;
            }

            for (c, w) in centroid.coords_mut().iter_mut().zip(&weighted) {
                *c = (w / weight_sum).trunc();
            }

            let coords: Vec<String> = centroid.coords().iter().map(f64::to_string).collect();
            let _ = writeln!(self.log, "Cluster Centroid: ({})", coords.join("; "));
        }
    }

    /// Objective function `J = Σ_i Σ_j U[i][j]^m · d(i,j)²` over the current
    /// memberships and centroid positions. Pure; used to decide convergence.
    fn objective(&self) -> f64 {
        let mut j_total = 0.0;

        for (i, point) in self.points.iter().enumerate() {
            for (j, centroid) in self.centroids.iter().enumerate() {
                let d = euclidean(point.coords(), centroid.coords());
                j_total += self.memberships.get(i, j).powf(self.fuzzyness) * d * d;
            }
        }

        j_total
    }

    /// Iterate until the objective function stabilizes.
    ///
    /// Each iteration recomputes centroids from the current memberships, then
    /// memberships from the new centroids, and stops once the objective
    /// changes by less than `accuracy`. The loop is bounded at 20 iterations
    /// no matter what accuracy is requested; hitting the cap is not an error
    /// and is only distinguishable from convergence by the returned count.
    ///
    /// Returns the number of iterations performed, in `[1, 20]`.
    pub fn run(&mut self, accuracy: f64) -> usize {
        let mut iterations = 0;

        loop {
            iterations += 1;

            let before = self.objective();
            self.update_centroids();
            self.step();
            let after = self.objective();

            log::debug!(
                "iteration {}: objective {:.6} -> {:.6}",
                iterations,
                before,
                after
            );

            if (before - after).abs() < accuracy {
                log::info!("converged after {} iterations", iterations);
                break;
            }
            if iterations >= MAX_ITERATIONS {
                log::info!("iteration cap ({}) reached", MAX_ITERATIONS);
                break;
            }
        }

        iterations
    }

    /// Read-only view of the membership matrix (rows = points, columns =
    /// clusters).
    pub fn memberships(&self) -> &Membership {
        &self.memberships
    }

    /// The points, with their current cluster assignments.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// The centroids at their current positions.
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    /// Accumulated centroid log, one line per cluster per centroid update.
    pub fn log(&self) -> &str {
        &self.log
    }

    /// The fuzzyness factor `m`.
    pub fn fuzzyness(&self) -> f64 {
        self.fuzzyness
    }
}
