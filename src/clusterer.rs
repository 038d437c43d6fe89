mod hierarchical;
mod kmeans;
mod sequential;

use crate::cluster::Cluster;
use crate::error::ClusterError;
pub use hierarchical::{hierarchical_clustering, HierarchicalClusterer};
pub use kmeans::{kmeans_clustering, KMeansClusterer};
pub use sequential::{sequential_clustering, SequentialClusterer};

/// A strategy that reduces a list of clusters to a coarser list.
///
/// Implementors validate their parameters against the input and report
/// problems as [`ClusterError`]s instead of producing degenerate output.
pub trait Clusterer {
    fn clusterize(&self, clusters: Vec<Cluster>) -> Result<Vec<Cluster>, ClusterError>;
}

/// Shared parameter check: at least one cluster, and no more than the input holds.
fn check_cluster_count(requested: usize, available: usize) -> Result<(), ClusterError> {
    if requested == 0 {
        return Err(ClusterError::InvalidClusterCount { requested });
    }
    if requested > available {
        return Err(ClusterError::NotEnoughClusters {
            requested,
            available,
        });
    }
    Ok(())
}
