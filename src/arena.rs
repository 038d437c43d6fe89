use crate::cluster::{Centered, Cluster};
use crate::error::ClusterError;
use std::fmt;

/// Stable identifier of a cluster slot inside a [`ClusterArena`].
///
/// A handle keeps pointing at the same slot for the whole lifetime of the
/// arena, no matter how many other clusters are merged away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterHandle(usize);

impl ClusterHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ClusterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns a working set of clusters addressed by [`ClusterHandle`]s.
///
/// Merging folds one live cluster into another and retires the absorbed
/// handle instead of shifting the remaining entries.
///
/// # Example
///
/// ```
/// use closest_pair_clustering::{Cluster, ClusterArena};
///
/// let mut arena = ClusterArena::new(vec![
///     Cluster::singleton("a", 0.0, 0.0, 1, 0.0),
///     Cluster::singleton("b", 2.0, 0.0, 1, 0.0),
/// ]);
/// let handles: Vec<_> = arena.handles().collect();
///
/// arena.merge(handles[0], handles[1]).unwrap();
/// assert_eq!(arena.len(), 1);
/// assert!(arena.get(handles[1]).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClusterArena {
    slots: Vec<Option<Cluster>>,
    live: usize,
}

impl ClusterArena {
    pub fn new(clusters: Vec<Cluster>) -> ClusterArena {
        let live = clusters.len();
        ClusterArena {
            slots: clusters.into_iter().map(Some).collect(),
            live,
        }
    }

    /// Number of live (not yet retired) clusters.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn get(&self, handle: ClusterHandle) -> Option<&Cluster> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    /// Handles of all live clusters, in slot order.
    pub fn handles(&self) -> impl Iterator<Item = ClusterHandle> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| ClusterHandle(index))
    }

    /// Position snapshots of every live cluster, suitable for the closest-pair solvers.
    pub fn located(&self) -> Vec<LocatedHandle> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref().map(|cluster| LocatedHandle {
                    handle: ClusterHandle(index),
                    horiz_center: cluster.horiz_center(),
                    vert_center: cluster.vert_center(),
                })
            })
            .collect()
    }

    /// Removes a cluster from the working set and hands it back.
    pub fn retire(&mut self, handle: ClusterHandle) -> Result<Cluster, ClusterError> {
        let cluster = self
            .slots
            .get_mut(handle.0)
            .and_then(Option::take)
            .ok_or(ClusterError::RetiredHandle(handle))?;
        self.live -= 1;
        Ok(cluster)
    }

    /// Folds the cluster behind `absorbed` into the one behind `survivor`
    /// and retires `absorbed`.
    ///
    /// # Errors
    ///
    /// * [`ClusterError::SelfMerge`] if both handles are the same.
    /// * [`ClusterError::RetiredHandle`] if either handle is no longer live.
    pub fn merge(
        &mut self,
        survivor: ClusterHandle,
        absorbed: ClusterHandle,
    ) -> Result<&Cluster, ClusterError> {
        if survivor == absorbed {
            return Err(ClusterError::SelfMerge(survivor));
        }
        if self.get(survivor).is_none() {
            return Err(ClusterError::RetiredHandle(survivor));
        }
        let absorbed_cluster = self.retire(absorbed)?;
        let target = self.slots[survivor.0]
            .as_mut()
            .ok_or(ClusterError::RetiredHandle(survivor))?;
        Ok(target.merge_clusters(&absorbed_cluster))
    }

    /// Consumes the arena, returning the live clusters in slot order.
    pub fn into_clusters(self) -> Vec<Cluster> {
        self.slots.into_iter().flatten().collect()
    }
}

/// A live handle together with a snapshot of its cluster's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedHandle {
    pub handle: ClusterHandle,
    horiz_center: f64,
    vert_center: f64,
}

impl Centered for LocatedHandle {
    fn horiz_center(&self) -> f64 {
        self.horiz_center
    }

    fn vert_center(&self) -> f64 {
        self.vert_center
    }
}
