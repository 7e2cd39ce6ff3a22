use thiserror::Error;

/// Errors returned at engine construction.
///
/// All numerical edge cases during iteration (zero distances, division
/// guards) are handled internally via epsilon substitution and never
/// surface as errors; a run either fails here or completes.
#[derive(Debug, Error)]
pub enum Error {
    /// Point or centroid collection is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points and centroids have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
