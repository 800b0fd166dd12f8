//! Per-cluster aggregate state: members, centroid, spread and representatives.

use super::point::{ClusterId, Point, PointId};

/// Derived statistics of one cluster.
///
/// `stdev` is `sqrt(sum(d(centroid, p)^2) / (m - 1))` over the `m` members, so
/// it is NaN for clusters with fewer than two members. Empty clusters keep a
/// default centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAggregate {
    pub id: ClusterId,
    pub members: Vec<PointId>,
    pub centroid: Point,
    pub stdev: f64,
    pub representatives: Vec<PointId>,
}

impl ClusterAggregate {
    pub fn new(id: ClusterId) -> Self {
        Self {
            id,
            members: Vec::new(),
            centroid: Point::default(),
            stdev: f64::NAN,
            representatives: Vec::new(),
        }
    }

    pub fn add_member(&mut self, point: PointId) {
        self.members.push(point);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Compute centroid and standard deviation from the current members.
    pub fn compute_data(&mut self, points: &[Point]) {
        if self.members.is_empty() {
            return;
        }

        let mut centroid = Point::default();
        for id in &self.members {
            centroid += points[id.index()];
        }
        centroid /= self.members.len() as f64;

        let sum_squares: f64 = self
            .members
            .iter()
            .map(|id| centroid.distance_squared(&points[id.index()]))
            .sum();

        self.centroid = centroid;
        // 0 / 0 for singletons
        self.stdev = (sum_squares / (self.members.len() - 1) as f64).sqrt();
    }

    /// Pick up to `r` representatives by farthest-first traversal.
    ///
    /// With `r >= len()` every member is a representative, in membership
    /// order. Otherwise the first pick is the member farthest from the
    /// centroid and each following pick is the unused member farthest from
    /// the previous pick. Ties go to the earliest member.
    pub fn choose_representatives(&mut self, r: usize, points: &[Point]) {
        if r >= self.members.len() {
            self.representatives = self.members.clone();
            return;
        }

        let mut used = vec![false; self.members.len()];
        let mut reference = self.centroid;
        self.representatives = Vec::with_capacity(r);

        for _ in 0..r {
            let mut best: Option<(usize, f64)> = None;
            for (pos, id) in self.members.iter().enumerate() {
                if used[pos] {
                    continue;
                }
                let d = reference.distance(&points[id.index()]);
                if best.is_none_or(|(_, max)| d > max) {
                    best = Some((pos, d));
                }
            }

            // r < len() keeps at least one member unused each round.
            let Some((pos, _)) = best else { break };
            used[pos] = true;
            let chosen = self.members[pos];
            self.representatives.push(chosen);
            reference = points[chosen.index()];
        }
    }

    /// Representative nearest to `p`, ties to the earliest. `None` without representatives.
    pub fn closest_representative(&self, p: &Point, points: &[Point]) -> Option<PointId> {
        let mut best: Option<(PointId, f64)> = None;
        for &id in &self.representatives {
            let d = p.distance(&points[id.index()]);
            if best.is_none_or(|(_, min)| d < min) {
                best = Some((id, d));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Representatives moved toward the centroid by factor `s`.
    pub fn shrunk_representatives(&self, s: f64, points: &[Point]) -> Vec<Point> {
        self.representatives
            .iter()
            .map(|id| points[id.index()].shrink_toward(&self.centroid, s))
            .collect()
    }
}
