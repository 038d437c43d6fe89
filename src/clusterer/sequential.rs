use crate::cluster::Cluster;
use crate::clusterer::{check_cluster_count, Clusterer};
use crate::error::ClusterError;

/// Partitions the list, in its given order, into `num_clusters` contiguous
/// runs of near-equal length and merges each run into its first cluster.
///
/// Position `p` of `n` goes to run `p * num_clusters / n`. This ignores
/// geometry entirely and serves as a baseline when comparing distortion.
pub fn sequential_clustering(singletons: Vec<Cluster>, num_clusters: usize) -> Vec<Cluster> {
    let total = singletons.len();
    let mut clusters: Vec<Cluster> = Vec::with_capacity(num_clusters.min(total));
    let mut current_run = None;

    for (position, cluster) in singletons.into_iter().enumerate() {
        let run = position * num_clusters / total;
        if current_run == Some(run) {
            if let Some(last) = clusters.last_mut() {
                last.merge_clusters(&cluster);
                continue;
            }
        }
        clusters.push(cluster);
        current_run = Some(run);
    }
    clusters
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequentialClusterer {
    num_clusters: usize,
}

impl SequentialClusterer {
    pub fn new(num_clusters: usize) -> Result<SequentialClusterer, ClusterError> {
        if num_clusters == 0 {
            return Err(ClusterError::InvalidClusterCount {
                requested: num_clusters,
            });
        }
        Ok(SequentialClusterer { num_clusters })
    }
}

impl Clusterer for SequentialClusterer {
    fn clusterize(&self, clusters: Vec<Cluster>) -> Result<Vec<Cluster>, ClusterError> {
        check_cluster_count(self.num_clusters, clusters.len())?;
        Ok(sequential_clustering(clusters, self.num_clusters))
    }
}
