use crate::error::ClusterError;
use std::collections::BTreeSet;

/// Anything that has a position in the plane.
///
/// The closest-pair solvers are generic over this trait so they can run both
/// over plain cluster lists and over lightweight views of an arena.
pub trait Centered {
    /// Horizontal coordinate of the center.
    fn horiz_center(&self) -> f64;

    /// Vertical coordinate of the center.
    fn vert_center(&self) -> f64;

    /// Squared Euclidean distance between two centers.
    fn squared_distance<C: Centered + ?Sized>(&self, other: &C) -> f64 {
        let horiz = self.horiz_center() - other.horiz_center();
        let vert = self.vert_center() - other.vert_center();
        horiz * horiz + vert * vert
    }

    /// Euclidean distance between two centers.
    fn distance<C: Centered + ?Sized>(&self, other: &C) -> f64 {
        self.squared_distance(other).sqrt()
    }
}

impl<T: Centered + ?Sized> Centered for &T {
    fn horiz_center(&self) -> f64 {
        (**self).horiz_center()
    }

    fn vert_center(&self) -> f64 {
        (**self).vert_center()
    }
}

/// One row of the external data table: a single real-world unit
/// (e.g. a county) with its position, weight and baseline distortion.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    pub id: String,
    pub horiz_center: f64,
    pub vert_center: f64,
    pub population: u64,
    pub baseline_error: f64,
}

impl PointRecord {
    pub fn new(
        id: impl Into<String>,
        horiz_center: f64,
        vert_center: f64,
        population: u64,
        baseline_error: f64,
    ) -> PointRecord {
        PointRecord {
            id: id.into(),
            horiz_center,
            vert_center,
            population,
            baseline_error,
        }
    }
}

impl Centered for PointRecord {
    fn horiz_center(&self) -> f64 {
        self.horiz_center
    }

    fn vert_center(&self) -> f64 {
        self.vert_center
    }
}

/// A weighted aggregate of one or more original points.
///
/// The center is the population-weighted centroid of everything merged into
/// the cluster, and `error` accumulates the population-weighted squared
/// distance of those points to the centroid.
///
/// # Example
///
/// ```
/// use closest_pair_clustering::{Centered, Cluster};
///
/// let mut left = Cluster::singleton("a", 0.0, 0.0, 1, 0.0);
/// let right = Cluster::singleton("b", 2.0, 0.0, 1, 0.0);
/// left.merge_clusters(&right);
///
/// assert_eq!(left.horiz_center(), 1.0);
/// assert_eq!(left.total_population(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cluster {
    /// Identifiers of every original point folded into this cluster.
    members: BTreeSet<String>,
    horiz_center: f64,
    vert_center: f64,
    population: u64,
    /// Accumulated distortion, used only for external scoring.
    error: f64,
}

impl Cluster {
    /// Creates a cluster from its raw parts.
    ///
    /// No validation is performed; use [`Cluster::from_record`] for data
    /// coming from outside.
    pub fn new(
        members: BTreeSet<String>,
        horiz_center: f64,
        vert_center: f64,
        population: u64,
        error: f64,
    ) -> Cluster {
        Cluster {
            members,
            horiz_center,
            vert_center,
            population,
            error,
        }
    }

    /// Creates a cluster holding exactly one member.
    pub fn singleton(
        id: impl Into<String>,
        horiz_center: f64,
        vert_center: f64,
        population: u64,
        error: f64,
    ) -> Cluster {
        Cluster::new(
            BTreeSet::from([id.into()]),
            horiz_center,
            vert_center,
            population,
            error,
        )
    }

    /// An empty accumulator: no members, zero population, centered at the origin.
    pub fn empty() -> Cluster {
        Cluster::default()
    }

    /// Builds a singleton cluster from an input record.
    ///
    /// # Errors
    ///
    /// * [`ClusterError::NonFiniteCoordinate`] if either coordinate is NaN or infinite.
    /// * [`ClusterError::InvalidError`] if the baseline error is negative or not finite.
    pub fn from_record(record: &PointRecord) -> Result<Cluster, ClusterError> {
        if !record.horiz_center.is_finite() || !record.vert_center.is_finite() {
            return Err(ClusterError::NonFiniteCoordinate {
                id: record.id.clone(),
            });
        }
        if !record.baseline_error.is_finite() || record.baseline_error < 0.0 {
            return Err(ClusterError::InvalidError {
                id: record.id.clone(),
                value: record.baseline_error,
            });
        }
        Ok(Cluster::singleton(
            record.id.clone(),
            record.horiz_center,
            record.vert_center,
            record.population,
            record.baseline_error,
        ))
    }

    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    pub fn total_population(&self) -> u64 {
        self.population
    }

    pub fn error(&self) -> f64 {
        self.error
    }

    /// Folds `other` into `self`.
    ///
    /// Members are unioned and populations added. The new center is the
    /// population-weighted average of both centers, and the error grows by
    /// `pop_a * pop_b / (pop_a + pop_b) * squared_distance(a, b)` on top of the
    /// two existing errors. A merged population of zero puts the center at the
    /// origin.
    pub fn merge_clusters(&mut self, other: &Cluster) -> &mut Cluster {
        let total = self.population + other.population;
        if total == 0 {
            self.horiz_center = 0.0;
            self.vert_center = 0.0;
            self.error += other.error;
        } else {
            let self_weight = self.population as f64;
            let other_weight = other.population as f64;
            let total_weight = total as f64;
            let squared_distance = self.squared_distance(other);

            self.horiz_center = (self_weight * self.horiz_center
                + other_weight * other.horiz_center)
                / total_weight;
            self.vert_center =
                (self_weight * self.vert_center + other_weight * other.vert_center) / total_weight;
            self.error += other.error + self_weight * other_weight / total_weight * squared_distance;
        }
        self.population = total;
        self.members.extend(other.members.iter().cloned());
        self
    }
}

impl Centered for Cluster {
    fn horiz_center(&self) -> f64 {
        self.horiz_center
    }

    fn vert_center(&self) -> f64 {
        self.vert_center
    }
}

/// Converts a whole data table into singleton clusters, stopping at the first
/// invalid record.
pub fn singletons(records: &[PointRecord]) -> Result<Vec<Cluster>, ClusterError> {
    records.iter().map(Cluster::from_record).collect()
}
