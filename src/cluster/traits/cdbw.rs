//! CDbw cluster validity trait.

use numr::error::Result;
use numr::runtime::Runtime;
use numr::tensor::Tensor;
use serde::{Deserialize, Serialize};

/// How clusters with fewer than two members are handled.
///
/// Their standard deviation is `0 / 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingletonPolicy {
    /// Keep the NaN spread and let it flow into the scores.
    #[default]
    Propagate,
    /// Refuse to evaluate the partition.
    Reject,
}

/// Options for CDbw evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdbwOptions {
    /// Representative points per cluster (`r`).
    /// Default: 10
    pub n_representatives: usize,
    /// Handling of clusters with fewer than two members.
    /// Default: Propagate
    pub singleton_policy: SingletonPolicy,
}

impl Default for CdbwOptions {
    fn default() -> Self {
        Self {
            n_representatives: 10,
            singleton_policy: SingletonPolicy::Propagate,
        }
    }
}

/// CDbw index and its components, as 0-d tensors in the data dtype.
#[derive(Debug, Clone)]
pub struct CdbwScore<R: Runtime> {
    /// `cohesion * separation * compactness`.
    pub cdbw: Tensor<R>,
    pub separation: Tensor<R>,
    pub compactness: Tensor<R>,
    pub cohesion: Tensor<R>,
    /// Number of clusters in the labelling, noise excluded.
    pub n_clusters: usize,
}

/// Density-based cluster validity.
pub trait CdbwAlgorithms<R: Runtime> {
    /// Score a labelling of 2-D data.
    ///
    /// # Arguments
    ///
    /// * `data` - Points with shape (n, 2)
    /// * `labels` - Cluster labels [n] I64, negative for noise
    /// * `options` - Representative count and edge-case handling
    ///
    /// # Returns
    ///
    /// Scores as 0-d tensors. With fewer than two clusters the index is
    /// undefined and every score is NaN.
    fn cdbw(
        &self,
        data: &Tensor<R>,
        labels: &Tensor<R>,
        options: &CdbwOptions,
    ) -> Result<CdbwScore<R>>;
}
