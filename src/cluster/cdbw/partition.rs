//! Read-only cluster assignment consumed by the CDbw engine.

use super::point::{ClusterId, PointId};
use crate::cluster::error::{CdbwError, CdbwResult};

/// Assignment of every object to a cluster, or to noise.
///
/// Cluster ids are dense indices `0..cluster_count()`. Noise objects carry no
/// id; they are excluded from cluster aggregates but still take part in
/// spatial range queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    assignments: Vec<Option<ClusterId>>,
    n_clusters: usize,
    medoids: Vec<PointId>,
}

impl Partition {
    /// Build a partition over `n_clusters` clusters.
    ///
    /// Fails if any assignment is `>= n_clusters`.
    pub fn new(assignments: Vec<Option<ClusterId>>, n_clusters: usize) -> CdbwResult<Self> {
        if let Some((point, cluster)) = assignments
            .iter()
            .enumerate()
            .find_map(|(i, c)| c.filter(|c| c.index() >= n_clusters).map(|c| (i, c)))
        {
            return Err(CdbwError::ClusterOutOfRange {
                point,
                cluster: cluster.index(),
                n_clusters,
            });
        }

        Ok(Self {
            assignments,
            n_clusters,
            medoids: Vec::new(),
        })
    }

    /// Build a partition from integer labels, negative labels marking noise.
    ///
    /// The cluster count is `max(label) + 1`; ids below the maximum that no
    /// object carries become empty clusters.
    pub fn from_labels(labels: &[i64]) -> Self {
        let assignments: Vec<Option<ClusterId>> = labels
            .iter()
            .map(|&l| usize::try_from(l).ok().map(ClusterId))
            .collect();
        let n_clusters = assignments
            .iter()
            .flatten()
            .map(|c| c.index() + 1)
            .max()
            .unwrap_or(0);

        Self {
            assignments,
            n_clusters,
            medoids: Vec::new(),
        }
    }

    /// Attach one medoid per cluster, as produced by medoid-based partitioners.
    pub fn with_medoids(mut self, medoids: Vec<PointId>) -> CdbwResult<Self> {
        if medoids.len() != self.n_clusters {
            return Err(CdbwError::MedoidCountMismatch {
                expected: self.n_clusters,
                actual: medoids.len(),
            });
        }
        self.medoids = medoids;
        Ok(self)
    }

    /// Number of objects, noise included.
    pub fn object_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of clusters, noise excluded.
    pub fn cluster_count(&self) -> usize {
        self.n_clusters
    }

    /// Cluster of `object`, `None` for noise or out-of-range objects.
    pub fn cluster_of(&self, object: PointId) -> Option<ClusterId> {
        self.assignments.get(object.index()).copied().flatten()
    }

    /// Medoid of `cluster`, if medoids were attached.
    pub fn medoid(&self, cluster: ClusterId) -> Option<PointId> {
        self.medoids.get(cluster.index()).copied()
    }

    /// Number of objects labelled as noise.
    pub fn noise_count(&self) -> usize {
        self.assignments.iter().filter(|c| c.is_none()).count()
    }

    /// Objects assigned to `cluster`, in object order.
    pub fn members(&self, cluster: ClusterId) -> impl Iterator<Item = PointId> + '_ {
        self.assignments
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == Some(cluster))
            .map(|(i, _)| PointId(i))
    }
}
