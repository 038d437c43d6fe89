use crate::arena::ClusterArena;
use crate::closest_pair::fast_closest_pair;
use crate::cluster::Cluster;
use crate::clusterer::Clusterer;
use crate::error::ClusterError;

/// Greedy agglomerative clustering.
///
/// While more than `target_count` clusters remain, the globally closest pair
/// (found with [`fast_closest_pair`]) is merged: the cluster at the higher
/// index is folded into the one at the lower index and its handle retired.
/// Past merges are never reconsidered.
///
/// A list that already has `target_count` entries or fewer is returned
/// unchanged. `target_count` must be at least 1; with 0 the loop stops once a
/// single cluster is left.
///
/// The surviving clusters come back in the order of their input positions.
pub fn hierarchical_clustering(clusters: Vec<Cluster>, target_count: usize) -> Vec<Cluster> {
    if clusters.len() <= target_count {
        return clusters;
    }

    log::debug!(
        "hierarchical clustering: {} clusters down to {target_count}",
        clusters.len()
    );
    let mut arena = ClusterArena::new(clusters);
    while arena.len() > target_count {
        let mut located = arena.located();
        let closest = fast_closest_pair(&mut located);
        let Some((lo, hi)) = closest.indices() else {
            log::warn!(
                "No pair left to merge with {} cluster(s) remaining",
                arena.len()
            );
            break;
        };

        let (survivor, absorbed) = (located[lo].handle, located[hi].handle);
        log::trace!(
            "merging {absorbed} into {survivor} at distance {}",
            closest.distance
        );
        if let Err(e) = arena.merge(survivor, absorbed) {
            log::error!("Failed to merge {absorbed} into {survivor}: {e}");
            break;
        }
    }
    arena.into_clusters()
}

/// [`hierarchical_clustering`] behind the [`Clusterer`] trait, with its target validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchicalClusterer {
    target_count: usize,
}

impl HierarchicalClusterer {
    /// # Errors
    ///
    /// [`ClusterError::InvalidClusterCount`] if `target_count` is zero.
    pub fn new(target_count: usize) -> Result<HierarchicalClusterer, ClusterError> {
        if target_count == 0 {
            return Err(ClusterError::InvalidClusterCount {
                requested: target_count,
            });
        }
        Ok(HierarchicalClusterer { target_count })
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }
}

impl Clusterer for HierarchicalClusterer {
    fn clusterize(&self, clusters: Vec<Cluster>) -> Result<Vec<Cluster>, ClusterError> {
        Ok(hierarchical_clustering(clusters, self.target_count))
    }
}
