//! Data model: points, centroids, and cluster assignments.

/// Cluster assignment of a single point.
///
/// Besides a concrete cluster, a point can be `Unassigned` (before the first
/// membership pass) or `Tied` when its maximum membership is exactly 0.5,
/// which in a two-cluster setup means it sits exactly between both centroids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClusterIndex {
    /// No assignment computed yet.
    Unassigned,
    /// Index of the maximum-membership cluster.
    Cluster(usize),
    /// Ambiguous assignment: the maximum membership is exactly 0.5.
    Tied,
}

impl ClusterIndex {
    /// Numeric view of the assignment: the cluster index, `0.5` for a tie,
    /// `-1.0` when unassigned.
    pub fn as_f64(self) -> f64 {
        match self {
            ClusterIndex::Unassigned => -1.0,
            ClusterIndex::Cluster(j) => j as f64,
            ClusterIndex::Tied => 0.5,
        }
    }
}

/// A data point with an optional caller-defined tag.
///
/// Coordinates are fixed at construction; the cluster index is updated by the
/// engine after every membership pass. The tag is carried through untouched
/// so callers can attach whatever payload they need for rendering.
#[derive(Clone, Debug)]
pub struct Point<T = ()> {
    coords: Vec<f64>,
    tag: Option<T>,
    cluster_index: ClusterIndex,
}

impl<T> Point<T> {
    /// Create a point from its coordinates.
    pub fn new(coords: Vec<f64>) -> Self {
        Self {
            coords,
            tag: None,
            cluster_index: ClusterIndex::Unassigned,
        }
    }

    /// Create a point with an attached tag.
    pub fn with_tag(coords: Vec<f64>, tag: T) -> Self {
        Self {
            coords,
            tag: Some(tag),
            cluster_index: ClusterIndex::Unassigned,
        }
    }

    /// The point's coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Caller-supplied tag, if any.
    pub fn tag(&self) -> Option<&T> {
        self.tag.as_ref()
    }

    /// Current cluster assignment.
    pub fn cluster_index(&self) -> ClusterIndex {
        self.cluster_index
    }

    pub(crate) fn set_cluster_index(&mut self, idx: ClusterIndex) {
        self.cluster_index = idx;
    }
}

/// A cluster centroid, moved in place by the engine on every iteration.
#[derive(Clone, Debug)]
pub struct Centroid {
    coords: Vec<f64>,
}

impl Centroid {
    /// Create a centroid at an initial position.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// The centroid's current position.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub(crate) fn coords_mut(&mut self) -> &mut [f64] {
        &mut self.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_starts_unassigned() {
        let p: Point = Point::new(vec![1.0, 2.0]);
        assert_eq!(p.cluster_index(), ClusterIndex::Unassigned);
        assert_eq!(p.cluster_index().as_f64(), -1.0);
        assert!(p.tag().is_none());
    }

    #[test]
    fn test_point_tag_is_opaque() {
        let p = Point::with_tag(vec![0.0], "label");
        assert_eq!(p.tag(), Some(&"label"));
        assert_eq!(p.coords(), &[0.0]);
    }

    #[test]
    fn test_cluster_index_numeric_view() {
        assert_eq!(ClusterIndex::Cluster(3).as_f64(), 3.0);
        assert_eq!(ClusterIndex::Tied.as_f64(), 0.5);
    }
}
