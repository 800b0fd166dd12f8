//! CDbw evaluation engine.

use serde::{Deserialize, Serialize};

use super::aggregate::ClusterAggregate;
use super::density::{DensityEstimator, cohesion_from};
use super::partition::Partition;
use super::point::{ClusterId, Point, PointId};
use super::rcr::{RcrPair, RcrTable};
use crate::cluster::error::{CdbwError, CdbwResult};
use crate::cluster::traits::cdbw::{CdbwOptions, SingletonPolicy};
use crate::spatial::SpatialIndex;

/// Scores produced by one [`CdbwEngine::compute`] run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CdbwScores {
    pub cdbw: f64,
    pub separation: f64,
    pub compactness: f64,
    pub cohesion: f64,
    /// Mean absolute change of intra-cluster density between adjacent shrink factors.
    pub intra_density_change: f64,
}

/// Evaluates the CDbw index of a fixed partition.
///
/// Construction gathers the cluster aggregates and builds the spatial index
/// over all points, noise included. Each [`compute`](Self::compute) call
/// reselects representatives and rematches RCR pairs from scratch; the index
/// is reused. The partition and points are borrowed for the engine's lifetime.
#[derive(Debug)]
pub struct CdbwEngine<'a> {
    partition: &'a Partition,
    points: &'a [Point],
    options: CdbwOptions,
    clusters: Vec<ClusterAggregate>,
    index: SpatialIndex,
    rcrs: RcrTable,
    n_representatives: usize,
    scores: CdbwScores,
    computed: bool,
}

impl<'a> CdbwEngine<'a> {
    /// Prepare an engine over `partition` and `points`.
    ///
    /// Fails on `n_representatives == 0`, a point count that differs from the
    /// partition's object count, cluster ids at or past the object count, a
    /// non-finite coordinate, or, under [`SingletonPolicy::Reject`], any
    /// cluster with fewer than two members.
    pub fn new(
        partition: &'a Partition,
        points: &'a [Point],
        options: CdbwOptions,
    ) -> CdbwResult<Self> {
        validate_representatives(options.n_representatives)?;
        if partition.object_count() != points.len() {
            return Err(CdbwError::PointCountMismatch {
                expected: partition.object_count(),
                actual: points.len(),
            });
        }
        if partition.cluster_count() > partition.object_count() {
            return Err(CdbwError::TooManyClusters {
                n_clusters: partition.cluster_count(),
                n_objects: partition.object_count(),
            });
        }
        if let Some((point, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(CdbwError::NonFinitePoint {
                point,
                x: p.x,
                y: p.y,
            });
        }

        let clusters = build_clusters(partition, points);

        for c in &clusters {
            if c.len() < 2 {
                match options.singleton_policy {
                    SingletonPolicy::Reject => {
                        return Err(CdbwError::degenerate_cluster(c.id.index(), c.len()));
                    }
                    SingletonPolicy::Propagate => {
                        tracing::warn!(
                            cluster = %c.id,
                            size = c.len(),
                            "cluster spread undefined, scores will be NaN"
                        );
                    }
                }
            }
        }

        let index = SpatialIndex::build(points);

        tracing::debug!(
            objects = partition.object_count(),
            clusters = clusters.len(),
            noise = partition.noise_count(),
            "prepared CDbw engine"
        );

        Ok(Self {
            partition,
            points,
            n_representatives: options.n_representatives,
            options,
            clusters,
            index,
            rcrs: RcrTable::default(),
            scores: CdbwScores::default(),
            computed: false,
        })
    }

    /// Compute the CDbw index with `r` representatives per cluster.
    ///
    /// With fewer than two clusters the index is undefined: NaN is returned
    /// and the stored scores are left as they were.
    pub fn compute(&mut self, r: usize) -> CdbwResult<f64> {
        validate_representatives(r)?;

        let k = self.partition.cluster_count();
        if k < 2 {
            tracing::debug!(clusters = k, "CDbw undefined for fewer than two clusters");
            return Ok(f64::NAN);
        }

        self.n_representatives = r;
        for c in &mut self.clusters {
            c.choose_representatives(r, self.points);
        }
        self.rcrs = RcrTable::compute(&self.clusters, self.points);

        let estimator = self.estimator();
        let separation = estimator.separation();
        let profile = estimator.intra_density_profile();
        let compactness = profile.compactness;
        let cohesion = cohesion_from(&profile);
        let cdbw = cohesion * separation * compactness;

        self.scores = CdbwScores {
            cdbw,
            separation,
            compactness,
            cohesion,
            intra_density_change: profile.density_change,
        };
        self.computed = true;

        tracing::debug!(
            r,
            cdbw,
            separation,
            compactness,
            cohesion,
            "computed CDbw"
        );

        Ok(cdbw)
    }

    /// Compute with the representative count from the engine options.
    pub fn compute_default(&mut self) -> CdbwResult<f64> {
        self.compute(self.options.n_representatives)
    }

    fn estimator(&self) -> DensityEstimator<'_> {
        DensityEstimator {
            partition: self.partition,
            points: self.points,
            clusters: &self.clusters,
            index: &self.index,
            rcrs: &self.rcrs,
            n_representatives: self.n_representatives,
        }
    }

    /// Density helpers bound to the current representatives and RCR pairs.
    pub fn density_estimator(&self) -> DensityEstimator<'_> {
        self.estimator()
    }

    /// Last computed index; 0 before the first full run.
    pub fn cdbw(&self) -> f64 {
        self.scores.cdbw
    }

    pub fn separation(&self) -> f64 {
        self.scores.separation
    }

    pub fn compactness(&self) -> f64 {
        self.scores.compactness
    }

    pub fn cohesion(&self) -> f64 {
        self.scores.cohesion
    }

    pub fn intra_density_change(&self) -> f64 {
        self.scores.intra_density_change
    }

    /// All scores, `None` until a run with at least two clusters completed.
    pub fn scores(&self) -> Option<&CdbwScores> {
        self.computed.then_some(&self.scores)
    }

    pub fn clusters(&self) -> &[ClusterAggregate] {
        &self.clusters
    }

    pub fn options(&self) -> &CdbwOptions {
        &self.options
    }

    /// RCR pairs of `(i, j)` from the last run.
    pub fn rcr_pairs(&self, i: ClusterId, j: ClusterId) -> &[RcrPair] {
        self.rcrs.get(i, j)
    }
}

fn validate_representatives(r: usize) -> CdbwResult<()> {
    if r == 0 {
        return Err(CdbwError::invalid_configuration(
            "n_representatives",
            "at least one representative per cluster is required",
        ));
    }
    Ok(())
}

/// One aggregate per cluster id, members in object order, noise skipped.
fn build_clusters(partition: &Partition, points: &[Point]) -> Vec<ClusterAggregate> {
    let mut clusters: Vec<ClusterAggregate> = (0..partition.cluster_count())
        .map(|c| ClusterAggregate::new(ClusterId(c)))
        .collect();

    for i in 0..partition.object_count() {
        if let Some(c) = partition.cluster_of(PointId(i)) {
            clusters[c.index()].add_member(PointId(i));
        }
    }

    for c in &mut clusters {
        c.compute_data(points);
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_squares(offset: f64) -> (Partition, Vec<Point>) {
        let base = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.5, 0.5)];
        let mut points: Vec<Point> = base.iter().map(|&p| Point::from(p)).collect();
        points.extend(base.iter().map(|&(x, y)| Point::new(x + offset, y)));
        let labels = [0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
        (Partition::from_labels(&labels), points)
    }

    #[test]
    fn test_compute_two_squares() {
        let (partition, points) = two_squares(10.0);
        let mut engine = CdbwEngine::new(&partition, &points, CdbwOptions::default()).unwrap();

        let c0 = engine.clusters()[0].centroid;
        let c1 = engine.clusters()[1].centroid;
        assert!((c0.x - 0.5).abs() < 1e-12 && (c0.y - 0.5).abs() < 1e-12);
        assert!((c1.x - 10.5).abs() < 1e-12 && (c1.y - 0.5).abs() < 1e-12);

        let score = engine.compute(3).unwrap();
        assert!(score.is_finite());
        assert!(score > 0.0);
        assert!(engine.separation() > engine.compactness());
        assert_eq!(engine.cdbw(), score);
        assert_eq!(
            score,
            engine.cohesion() * engine.separation() * engine.compactness()
        );
    }

    #[test]
    fn test_accessors_before_compute() {
        let (partition, points) = two_squares(10.0);
        let engine = CdbwEngine::new(&partition, &points, CdbwOptions::default()).unwrap();
        assert!(engine.scores().is_none());
        assert_eq!(engine.cdbw(), 0.0);
        assert_eq!(engine.separation(), 0.0);
    }

    #[test]
    fn test_single_cluster_is_nan() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let partition = Partition::from_labels(&[0, 0, -1]);
        let mut engine = CdbwEngine::new(&partition, &points, CdbwOptions::default()).unwrap();
        for r in [1, 2, 10] {
            assert!(engine.compute(r).unwrap().is_nan());
        }
        assert!(engine.scores().is_none());
    }

    #[test]
    fn test_zero_representatives_rejected() {
        let (partition, points) = two_squares(10.0);
        let opts = CdbwOptions {
            n_representatives: 0,
            ..Default::default()
        };
        let err = CdbwEngine::new(&partition, &points, opts).unwrap_err();
        assert!(matches!(
            err,
            CdbwError::InvalidConfiguration {
                parameter: "n_representatives",
                ..
            }
        ));

        let mut engine = CdbwEngine::new(&partition, &points, CdbwOptions::default()).unwrap();
        assert!(engine.compute(0).is_err());
    }

    #[test]
    fn test_point_count_mismatch() {
        let (partition, points) = two_squares(10.0);
        let err = CdbwEngine::new(&partition, &points[..9], CdbwOptions::default()).unwrap_err();
        assert_eq!(
            err,
            CdbwError::PointCountMismatch {
                expected: 10,
                actual: 9
            }
        );
    }

    #[test]
    fn test_cluster_ids_past_object_count_rejected() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(6.0, 0.0),
        ];
        let partition = Partition::from_labels(&[0, 0, 1 << 40, 1 << 40]);
        let err = CdbwEngine::new(&partition, &points, CdbwOptions::default()).unwrap_err();
        assert_eq!(
            err,
            CdbwError::TooManyClusters {
                n_clusters: (1 << 40) + 1,
                n_objects: 4,
            }
        );

        // Unused ids below the object count stay allowed
        let partition = Partition::from_labels(&[0, 0, 3, 3]);
        assert!(CdbwEngine::new(&partition, &points, CdbwOptions::default()).is_ok());
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let (partition, mut points) = two_squares(10.0);
        points[7] = Point::new(10.0, f64::NAN);
        let err = CdbwEngine::new(&partition, &points, CdbwOptions::default()).unwrap_err();
        assert!(matches!(err, CdbwError::NonFinitePoint { point: 7, .. }));
    }

    #[test]
    fn test_singleton_policy() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(9.0, 9.0),
        ];
        let partition = Partition::from_labels(&[0, 0, 0, 1]);

        let reject = CdbwOptions {
            singleton_policy: SingletonPolicy::Reject,
            ..Default::default()
        };
        let err = CdbwEngine::new(&partition, &points, reject).unwrap_err();
        assert_eq!(err, CdbwError::degenerate_cluster(1, 1));

        let mut engine = CdbwEngine::new(&partition, &points, CdbwOptions::default()).unwrap();
        assert!(engine.clusters()[1].stdev.is_nan());
        assert!(engine.compute(2).unwrap().is_nan());
        assert!(engine.compactness().is_nan());
        // RCR distances do not depend on spread
        assert!(engine.separation().is_finite());
    }

    #[test]
    fn test_compute_default_uses_options() {
        let (partition, points) = two_squares(10.0);
        let opts = CdbwOptions {
            n_representatives: 3,
            ..Default::default()
        };
        let mut engine = CdbwEngine::new(&partition, &points, opts).unwrap();
        let a = engine.compute_default().unwrap();
        let b = engine.compute(3).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_rcr_pairs_exposed() {
        let (partition, points) = two_squares(10.0);
        let mut engine = CdbwEngine::new(&partition, &points, CdbwOptions::default()).unwrap();
        engine.compute(5).unwrap();
        let forward = engine.rcr_pairs(ClusterId(0), ClusterId(1));
        assert!(!forward.is_empty());
        assert!(engine.rcr_pairs(ClusterId(1), ClusterId(1)).is_empty());
    }
}
