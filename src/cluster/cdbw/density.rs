//! Inter- and intra-cluster density estimation over RCR pairs and shrunk representatives.

use super::aggregate::ClusterAggregate;
use super::partition::Partition;
use super::point::{ClusterId, Point};
use super::rcr::RcrTable;
use crate::spatial::SpatialIndex;

/// Shrink factors at which intra-cluster density is sampled.
pub const SHRINK_FACTORS: [f64; 8] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];

/// Compactness and the mean change of intra-cluster density between adjacent
/// shrink factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntraDensityProfile {
    pub compactness: f64,
    pub density_change: f64,
}

/// Density computations for one evaluation.
///
/// Borrows the engine state; nothing here is cached between calls.
pub struct DensityEstimator<'a> {
    pub partition: &'a Partition,
    pub points: &'a [Point],
    pub clusters: &'a [ClusterAggregate],
    pub index: &'a SpatialIndex,
    pub rcrs: &'a RcrTable,
    /// Configured representative count, the divisor of [`Self::density`].
    pub n_representatives: usize,
}

impl DensityEstimator<'_> {
    fn k(&self) -> usize {
        self.clusters.len()
    }

    fn cluster(&self, id: ClusterId) -> &ClusterAggregate {
        &self.clusters[id.index()]
    }

    /// Mean distance over the RCR pairs of `(i, j)`.
    ///
    /// A pair of clusters without RCR pairs is infinitely separated.
    pub fn distance_between_clusters(&self, i: ClusterId, j: ClusterId) -> f64 {
        let pairs = self.rcrs.get(i, j);
        if pairs.is_empty() {
            return f64::INFINITY;
        }

        let sum: f64 = pairs
            .iter()
            .map(|(u, v)| self.points[u.index()].distance(&self.points[v.index()]))
            .sum();
        sum / pairs.len() as f64
    }

    /// Density in the region between clusters `i` and `j`, zero without RCR pairs.
    pub fn density_between_clusters(&self, i: ClusterId, j: ClusterId) -> f64 {
        let pairs = self.rcrs.get(i, j);
        if pairs.is_empty() {
            return 0.0;
        }

        let si = self.cluster(i).stdev;
        let sj = self.cluster(j).stdev;
        let avg_stdev = ((si * si + sj * sj) / 2.0).sqrt();

        let sum: f64 = pairs
            .iter()
            .map(|(u, v)| {
                let pu = self.points[u.index()];
                let pv = self.points[v.index()];
                let mid = (pu + pv) / 2.0;
                let card = self.pair_cardinality(&mid, avg_stdev, i, j);
                (pu.distance(&pv) / (2.0 * avg_stdev)) * card
            })
            .sum();
        sum / pairs.len() as f64
    }

    /// Fraction of the members of `i` and `j` lying within `radius` of `u`.
    pub fn pair_cardinality(&self, u: &Point, radius: f64, i: ClusterId, j: ClusterId) -> f64 {
        let count = self.index.count_within_radius(u, radius, |id| {
            matches!(self.partition.cluster_of(id), Some(c) if c == i || c == j)
        });
        count as f64 / (self.cluster(i).len() + self.cluster(j).len()) as f64
    }

    /// Fraction of the members of `i` lying within `radius` of `u`.
    pub fn cardinality(&self, u: &Point, radius: f64, i: ClusterId) -> f64 {
        let count = self
            .index
            .count_within_radius(u, radius, |id| self.partition.cluster_of(id) == Some(i));
        count as f64 / self.cluster(i).len() as f64
    }

    /// Mean over clusters of the densest neighbouring region.
    pub fn inter_cluster_density(&self) -> f64 {
        let k = self.k();
        let sum: f64 = (0..k)
            .map(|i| {
                (0..k)
                    .filter(|&j| j != i)
                    .map(|j| self.density_between_clusters(ClusterId(i), ClusterId(j)))
                    .fold(f64::MIN_POSITIVE, |max, d| if d > max { d } else { max })
            })
            .sum();
        sum / k as f64
    }

    /// Mean closest-cluster distance, discounted by inter-cluster density.
    pub fn separation(&self) -> f64 {
        let k = self.k();
        let inter_density = self.inter_cluster_density();
        let sum: f64 = (0..k)
            .map(|i| {
                (0..k)
                    .filter(|&j| j != i)
                    .map(|j| self.distance_between_clusters(ClusterId(i), ClusterId(j)))
                    .fold(f64::INFINITY, |min, d| if d < min { d } else { min })
            })
            .sum();
        (sum / k as f64) / (1.0 + inter_density)
    }

    /// Summed cardinality of all shrunk representatives, divided by the
    /// configured representative count.
    ///
    /// Clusters smaller than `r` contribute fewer shrunk points but the
    /// divisor stays `r`.
    pub fn density(&self, s: f64) -> f64 {
        let sum: f64 = self
            .clusters
            .iter()
            .map(|c| {
                c.shrunk_representatives(s, self.points)
                    .iter()
                    .map(|p| self.cardinality(p, c.stdev, c.id))
                    .sum::<f64>()
            })
            .sum();
        sum / self.n_representatives as f64
    }

    /// Root mean square of the cluster standard deviations.
    pub fn average_stdev(&self) -> f64 {
        let sum_sq: f64 = self.clusters.iter().map(|c| c.stdev * c.stdev).sum();
        (sum_sq / self.k() as f64).sqrt()
    }

    pub fn intra_cluster_density(&self, s: f64) -> f64 {
        let density = self.density(s) / (self.k() as f64 * self.average_stdev());
        tracing::trace!(s, density, "intra-cluster density");
        density
    }

    /// Sample intra-cluster density at every shrink factor.
    pub fn intra_density_profile(&self) -> IntraDensityProfile {
        let samples: Vec<f64> = SHRINK_FACTORS
            .iter()
            .map(|&s| self.intra_cluster_density(s))
            .collect();

        let compactness = samples.iter().sum::<f64>() / samples.len() as f64;
        let density_change = samples
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .sum::<f64>()
            / (samples.len() - 1) as f64;

        IntraDensityProfile {
            compactness,
            density_change,
        }
    }

    pub fn compactness(&self) -> f64 {
        self.intra_density_profile().compactness
    }

    pub fn cohesion(&self) -> f64 {
        cohesion_from(&self.intra_density_profile())
    }
}

/// `compactness / (1 + density_change)`.
pub fn cohesion_from(profile: &IntraDensityProfile) -> f64 {
    profile.compactness / (1.0 + profile.density_change)
}
