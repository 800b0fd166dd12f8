//! 2-D KD-tree radius search backed by `kiddo`.
//!
//! The tree is built once over an immutable snapshot of the point set and
//! answers "all points within radius" queries. Points with a non-finite
//! coordinate are kept out of the tree and never match a query.

use std::fmt;

use kiddo::SquaredEuclidean;
use kiddo::immutable::float::kdtree::ImmutableKdTree;

use crate::cluster::cdbw::{Point, PointId};

/// Points per kiddo leaf bucket.
const BUCKET_SIZE: usize = 32;

type Tree = ImmutableKdTree<f64, u64, 2, BUCKET_SIZE>;

/// Immutable 2-D KD-tree over every finite point of a data set.
///
/// Owns a copy of the coordinates, so it stays valid independently of the
/// slice it was built from.
#[derive(Clone)]
pub struct SpatialIndex {
    points: Vec<Point>,
    /// Tree item `i` is `ids[i]`.
    ids: Vec<PointId>,
    tree: Option<Tree>,
}

impl SpatialIndex {
    /// Build the tree over the finite points of `points`.
    pub fn build(points: &[Point]) -> Self {
        let (ids, coords): (Vec<PointId>, Vec<[f64; 2]>) = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .map(|(i, p)| (PointId(i), [p.x, p.y]))
            .unzip();

        let skipped = points.len() - ids.len();
        if skipped > 0 {
            tracing::warn!(skipped, "non-finite points left out of the spatial index");
        }

        let tree = (!coords.is_empty()).then(|| Tree::new_from_slice(&coords));

        Self {
            points: points.to_vec(),
            ids,
            tree,
        }
    }

    /// Number of points the index was built from, indexed or not.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points actually held by the tree.
    pub fn indexed_len(&self) -> usize {
        self.ids.len()
    }

    /// Indices of all points with `distance(center, p) <= radius`, unsorted.
    ///
    /// A NaN or negative radius matches nothing.
    pub fn within_radius(&self, center: &Point, radius: f64) -> Vec<PointId> {
        let mut out = Vec::new();
        self.for_each_within_radius(center, radius, |id| out.push(id));
        out
    }

    /// Number of points with `distance(center, p) <= radius` that satisfy `keep`.
    pub fn count_within_radius<F>(&self, center: &Point, radius: f64, mut keep: F) -> usize
    where
        F: FnMut(PointId) -> bool,
    {
        let mut count = 0;
        self.for_each_within_radius(center, radius, |id| {
            if keep(id) {
                count += 1;
            }
        });
        count
    }

    fn for_each_within_radius<F>(&self, center: &Point, radius: f64, mut visit: F)
    where
        F: FnMut(PointId),
    {
        let Some(tree) = &self.tree else {
            return;
        };
        if radius.is_nan() || radius < 0.0 || !center.is_finite() {
            return;
        }

        // kiddo's bound is exclusive; widen it and apply the inclusive test here.
        let radius_sq = radius * radius;
        let bound = radius_sq * (1.0 + 4.0 * f64::EPSILON) + f64::MIN_POSITIVE;

        for neighbour in tree.within_unsorted::<SquaredEuclidean>(&[center.x, center.y], bound) {
            let id = self.ids[neighbour.item as usize];
            if center.distance_squared(&self.points[id.index()]) <= radius_sq {
                visit(id);
            }
        }
    }
}

impl fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("points", &self.points.len())
            .field("indexed", &self.ids.len())
            .finish()
    }
}
