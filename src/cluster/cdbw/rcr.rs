//! Mutual nearest representative ("RCR") pairs between clusters.

use super::aggregate::ClusterAggregate;
use super::point::{ClusterId, Point, PointId};

/// A representative of cluster `i` paired with a representative of cluster `j`.
pub type RcrPair = (PointId, PointId);

/// Dense `k x k` table of RCR pairs, one list per ordered cluster pair.
///
/// The diagonal is always empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RcrTable {
    n_clusters: usize,
    cells: Vec<Vec<RcrPair>>,
}

impl RcrTable {
    /// Match every ordered pair of distinct clusters.
    pub fn compute(clusters: &[ClusterAggregate], points: &[Point]) -> Self {
        let k = clusters.len();
        let mut cells = vec![Vec::new(); k * k];

        for i in 0..k {
            for j in 0..k {
                if i != j {
                    let pairs = match_pair(&clusters[i], &clusters[j], points);
                    if pairs.is_empty() {
                        tracing::warn!(
                            cluster_i = i,
                            cluster_j = j,
                            "no mutual nearest representatives, clusters treated as infinitely separated"
                        );
                    } else {
                        tracing::trace!(
                            cluster_i = i,
                            cluster_j = j,
                            pairs = pairs.len(),
                            "matched representatives"
                        );
                    }
                    cells[i * k + j] = pairs;
                }
            }
        }

        Self {
            n_clusters: k,
            cells,
        }
    }

    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Pairs for `(i, j)`; first element of each pair belongs to `i`.
    pub fn get(&self, i: ClusterId, j: ClusterId) -> &[RcrPair] {
        if i.index() >= self.n_clusters || j.index() >= self.n_clusters {
            return &[];
        }
        &self.cells[i.index() * self.n_clusters + j.index()]
    }
}

/// RCR pairs between clusters `ci` and `cj`.
///
/// Each representative `a` of `ci` proposes its closest representative `b` in
/// `cj`, and each representative of `cj` proposes its closest in `ci`. A
/// proposal `(a, b)` is kept when `b` proposed `a` back. All confirmed
/// proposals are returned in the scan order of `ci`'s representatives.
pub fn match_pair(
    ci: &ClusterAggregate,
    cj: &ClusterAggregate,
    points: &[Point],
) -> Vec<RcrPair> {
    let forward: Vec<(PointId, Option<PointId>)> = ci
        .representatives
        .iter()
        .map(|&a| (a, cj.closest_representative(&points[a.index()], points)))
        .collect();
    let backward: Vec<(PointId, Option<PointId>)> = cj
        .representatives
        .iter()
        .map(|&b| (b, ci.closest_representative(&points[b.index()], points)))
        .collect();

    let mut result = Vec::new();
    for &(a, b) in &forward {
        let Some(b) = b else { continue };
        for &(b_back, a_back) in &backward {
            if b_back == b && a_back == Some(a) {
                result.push((a, b));
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(id: usize, members: &[usize], points: &[Point], r: usize) -> ClusterAggregate {
        let mut c = ClusterAggregate::new(ClusterId(id));
        for &m in members {
            c.add_member(PointId(m));
        }
        c.compute_data(points);
        c.choose_representatives(r, points);
        c
    }

    #[test]
    fn test_single_mutual_pair() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(6.0, 0.0),
        ];
        let a = cluster(0, &[0, 1], &points, 2);
        let b = cluster(1, &[2, 3], &points, 2);

        // 0 -> 2, 1 -> 2, 2 -> 1, 3 -> 1: only (1, 2) is mutual
        assert_eq!(match_pair(&a, &b, &points), vec![(PointId(1), PointId(2))]);
        assert_eq!(match_pair(&b, &a, &points), vec![(PointId(2), PointId(1))]);
    }

    #[test]
    fn test_parallel_clusters_match_every_row() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(3.0, 2.0),
        ];
        let a = cluster(0, &[0, 1, 2], &points, 3);
        let b = cluster(1, &[3, 4, 5], &points, 3);
        assert_eq!(
            match_pair(&a, &b, &points),
            vec![
                (PointId(0), PointId(3)),
                (PointId(1), PointId(4)),
                (PointId(2), PointId(5))
            ]
        );
    }

    #[test]
    fn test_empty_cluster_has_no_pairs() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let a = cluster(0, &[0, 1], &points, 2);
        let empty = cluster(1, &[], &points, 2);
        assert!(match_pair(&a, &empty, &points).is_empty());
        assert!(match_pair(&empty, &a, &points).is_empty());
    }

    #[test]
    fn test_table_diagonal_and_bounds() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(6.0, 0.0),
        ];
        let clusters = vec![
            cluster(0, &[0, 1], &points, 2),
            cluster(1, &[2, 3], &points, 2),
        ];
        let table = RcrTable::compute(&clusters, &points);
        assert_eq!(table.n_clusters(), 2);
        assert!(table.get(ClusterId(0), ClusterId(0)).is_empty());
        assert_eq!(table.get(ClusterId(0), ClusterId(1)).len(), 1);
        assert!(table.get(ClusterId(0), ClusterId(7)).is_empty());
    }
}
