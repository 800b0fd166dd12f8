//! Error types for cluster validity evaluation.

use thiserror::Error;

/// Result type for CDbw engine operations.
pub type CdbwResult<T> = Result<T, CdbwError>;

/// Errors raised while building or running a CDbw evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CdbwError {
    /// A configuration value is out of range.
    #[error("Invalid configuration '{parameter}': {message}")]
    InvalidConfiguration {
        parameter: &'static str,
        message: String,
    },

    /// A cluster is too small to have a defined spread.
    #[error("Degenerate cluster {cluster}: {size} member(s), at least 2 required")]
    DegenerateCluster { cluster: usize, size: usize },

    /// Partition and point set disagree on the number of objects.
    #[error("Point count mismatch: partition has {expected} objects, got {actual} points")]
    PointCountMismatch { expected: usize, actual: usize },

    /// An object is assigned to a cluster id outside `0..n_clusters`.
    #[error("Object {point} assigned to cluster {cluster}, but only {n_clusters} clusters exist")]
    ClusterOutOfRange {
        point: usize,
        cluster: usize,
        n_clusters: usize,
    },

    /// Cluster ids reach past the number of objects.
    #[error("Cluster count {n_clusters} exceeds object count {n_objects}")]
    TooManyClusters { n_clusters: usize, n_objects: usize },

    /// A point has a NaN or infinite coordinate.
    #[error("Point {point} has a non-finite coordinate ({x}, {y})")]
    NonFinitePoint { point: usize, x: f64, y: f64 },

    /// Medoid list length differs from the cluster count.
    #[error("Medoid count mismatch: expected {expected}, got {actual}")]
    MedoidCountMismatch { expected: usize, actual: usize },

    /// Error from an underlying numr operation.
    #[error("numr error: {0}")]
    NumrError(String),
}

impl CdbwError {
    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            message: message.into(),
        }
    }

    /// Create a DegenerateCluster error.
    pub fn degenerate_cluster(cluster: usize, size: usize) -> Self {
        Self::DegenerateCluster { cluster, size }
    }
}

impl From<numr::error::Error> for CdbwError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}

impl From<CdbwError> for numr::error::Error {
    fn from(err: CdbwError) -> Self {
        let arg = match &err {
            CdbwError::InvalidConfiguration { parameter, .. } => *parameter,
            CdbwError::DegenerateCluster { .. }
            | CdbwError::PointCountMismatch { .. }
            | CdbwError::ClusterOutOfRange { .. }
            | CdbwError::TooManyClusters { .. } => "labels",
            CdbwError::MedoidCountMismatch { .. } => "medoids",
            CdbwError::NonFinitePoint { .. } | CdbwError::NumrError(_) => "data",
        };
        numr::error::Error::InvalidArgument {
            arg,
            reason: err.to_string(),
        }
    }
}
