use crate::cluster::Centered;
use std::cmp::Ordering;

/// Inputs of this size or smaller are solved exhaustively by the divide-and-conquer solver.
const BRUTE_FORCE_THRESHOLD: usize = 3;

/// How many following strip candidates (in vertical order) each candidate is compared with.
const STRIP_NEIGHBOURS: usize = 3;

/// The canonical `(distance, lo, hi)` triple describing a pair of clusters.
///
/// `lo < hi` always holds for a found pair. Pairs are totally ordered by
/// distance, then `lo`, then `hi`, which is the tie-break every comparison
/// site in the crate relies on.
#[derive(Debug, Clone, Copy)]
pub struct ClusterPair {
    pub distance: f64,
    pub lo: usize,
    pub hi: usize,
}

impl ClusterPair {
    /// Returned when fewer than two clusters are available.
    pub const NOT_FOUND: ClusterPair = ClusterPair {
        distance: f64::INFINITY,
        lo: usize::MAX,
        hi: usize::MAX,
    };

    pub fn is_found(&self) -> bool {
        self.lo != usize::MAX && self.hi != usize::MAX
    }

    /// The pair's indices, or `None` for the sentinel.
    pub fn indices(&self) -> Option<(usize, usize)> {
        self.is_found().then_some((self.lo, self.hi))
    }

    /// Shifts both indices by `offset`, keeping the sentinel untouched.
    fn rebased(self, offset: usize) -> ClusterPair {
        if !self.is_found() {
            return self;
        }
        ClusterPair {
            distance: self.distance,
            lo: self.lo + offset,
            hi: self.hi + offset,
        }
    }
}

impl PartialEq for ClusterPair {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ClusterPair {}

impl PartialOrd for ClusterPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClusterPair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.lo.cmp(&other.lo))
            .then(self.hi.cmp(&other.hi))
    }
}

/// Distance between `points[first]` and `points[second]` in canonical form.
///
/// # Panics
///
/// Panics if either index is out of bounds.
pub fn pair_distance<P: Centered>(points: &[P], first: usize, second: usize) -> ClusterPair {
    ClusterPair {
        distance: points[first].distance(&points[second]),
        lo: first.min(second),
        hi: first.max(second),
    }
}

/// Finds the closest pair by checking every pair of points. O(n^2).
///
/// Returns [`ClusterPair::NOT_FOUND`] for fewer than two points.
pub fn slow_closest_pair<P: Centered>(points: &[P]) -> ClusterPair {
    let mut closest = ClusterPair::NOT_FOUND;
    for first in 0..points.len() {
        for second in first + 1..points.len() {
            closest = closest.min(pair_distance(points, first, second));
        }
    }
    closest
}

/// Finds the closest pair with the divide-and-conquer algorithm. O(n log n).
///
/// The slice is first stably sorted by horizontal center, so the returned
/// indices refer to the reordered slice. Running [`slow_closest_pair`] on the
/// same slice afterwards yields the same pair unless distances tie exactly.
///
/// Returns [`ClusterPair::NOT_FOUND`] for fewer than two points.
pub fn fast_closest_pair<P: Centered>(points: &mut [P]) -> ClusterPair {
    points.sort_by(|a, b| a.horiz_center().total_cmp(&b.horiz_center()));
    closest_pair_sorted(points)
}

fn closest_pair_sorted<P: Centered>(points: &[P]) -> ClusterPair {
    if points.len() <= BRUTE_FORCE_THRESHOLD {
        return slow_closest_pair(points);
    }

    let half = points.len() / 2;
    let (left, right) = points.split_at(half);

    let left_closest = closest_pair_sorted(left);
    let right_closest = closest_pair_sorted(right).rebased(half);
    let closest = left_closest.min(right_closest);

    let mid = 0.5 * (left[half - 1].horiz_center() + right[0].horiz_center());
    closest.min(closest_pair_strip(points, mid, closest.distance))
}

/// Finds the closest pair among points lying strictly within `half_width`
/// of the vertical line at `horiz_center`.
///
/// Candidates are ordered by vertical center and each one is compared only
/// with the next three candidates in that order. Indices in the result refer
/// to `points`, not to the strip.
pub fn closest_pair_strip<P: Centered>(
    points: &[P],
    horiz_center: f64,
    half_width: f64,
) -> ClusterPair {
    let mut strip: Vec<usize> = (0..points.len())
        .filter(|&index| (points[index].horiz_center() - horiz_center).abs() < half_width)
        .collect();
    strip.sort_by(|&a, &b| {
        points[a]
            .vert_center()
            .total_cmp(&points[b].vert_center())
            .then(a.cmp(&b))
    });

    let mut closest = ClusterPair::NOT_FOUND;
    for (position, &first) in strip.iter().enumerate() {
        for &second in strip.iter().skip(position + 1).take(STRIP_NEIGHBOURS) {
            closest = closest.min(pair_distance(points, first, second));
        }
    }
    closest
}
