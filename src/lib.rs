//! Fuzzy c-means clustering for dense vectors.
//!
//! `cmeans` is a small library implementing the fuzzy c-means (FCM)
//! algorithm: a soft-clustering variant of k-means in which every point has
//! a degree of membership in every cluster instead of a single hard label.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`FuzzyCMeans`]: the engine (initialization, single steps, run to
//!   convergence)
//! - [`Point`], [`Centroid`], [`Membership`]: the data model

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Centroid, ClusterIndex, FuzzyCMeans, Membership, Point};
pub use error::{Error, Result};
