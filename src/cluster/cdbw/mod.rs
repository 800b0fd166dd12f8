//! Host-side CDbw engine.
//!
//! The index rates a partition of 2-D points by how far apart its clusters
//! are and how dense they stay toward their centres:
//!
//! 1. Aggregate each cluster (members, centroid, standard deviation).
//! 2. Pick `r` representatives per cluster by farthest-first traversal.
//! 3. Pair representatives of every two clusters that are mutually nearest
//!    (RCR pairs).
//! 4. Separation: mean closest-cluster RCR distance, discounted by the
//!    density found around RCR midpoints.
//! 5. Compactness and cohesion: density around representatives shrunk toward
//!    their centroid at factors 0.1 to 0.8, and how much it changes.
//!
//! `cdbw = cohesion * separation * compactness`.

mod aggregate;
mod density;
mod engine;
mod partition;
mod point;
mod rcr;

pub use aggregate::ClusterAggregate;
pub use density::{DensityEstimator, IntraDensityProfile, SHRINK_FACTORS, cohesion_from};
pub use engine::{CdbwEngine, CdbwScores};
pub use partition::Partition;
pub use point::{ClusterId, Point, PointId, points_from_interleaved};
pub use rcr::{RcrPair, RcrTable, match_pair};
