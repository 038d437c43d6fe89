use crate::cluster::{Centered, Cluster};
use crate::clusterer::{check_cluster_count, Clusterer};
use crate::error::ClusterError;

/// Lloyd-style k-means over weighted clusters. The input is never modified.
///
/// # Arguments
///
/// * `clusters` - Clusters to group; their order only matters for seeding ties.
/// * `num_clusters` - Number of centroids, seeded from the most populous clusters.
/// * `num_iterations` - Number of assign-then-recompute rounds.
///
/// # Returns
///
/// `num_clusters` clusters. With `num_iterations == 0` these are copies of the
/// seeds in population-descending order. Otherwise each one is the merge of
/// every input cluster assigned to that centroid slot in the last round; a
/// slot that received nothing is an empty cluster at the origin.
///
/// # Details
///
/// Every round assigns all input clusters against the same centroid set
/// (batch updates), and ties in distance go to the lowest centroid index.
/// `num_clusters` must be between 1 and `clusters.len()`; a larger value
/// yields only `clusters.len()` centroids.
pub fn kmeans_clustering(
    clusters: &[Cluster],
    num_clusters: usize,
    num_iterations: usize,
) -> Vec<Cluster> {
    let mut by_population: Vec<&Cluster> = clusters.iter().collect();
    // Stable sort: equal populations keep their input order.
    by_population.sort_by(|a, b| b.total_population().cmp(&a.total_population()));

    let mut centroids: Vec<Cluster> = by_population
        .into_iter()
        .take(num_clusters)
        .cloned()
        .collect();

    for iteration in 0..num_iterations {
        let mut accumulators = vec![Cluster::empty(); centroids.len()];
        for cluster in clusters {
            if let Some(nearest) = nearest_centroid(&centroids, cluster) {
                accumulators[nearest].merge_clusters(cluster);
            }
        }
        log::trace!(
            "k-means iteration {}: populations {:?}",
            iteration + 1,
            accumulators
                .iter()
                .map(Cluster::total_population)
                .collect::<Vec<_>>()
        );
        centroids = accumulators;
    }

    log::debug!(
        "k-means: {} clusters into {} after {num_iterations} iteration(s)",
        clusters.len(),
        centroids.len()
    );
    centroids
}

/// Index of the centroid closest to `cluster`, lowest index on ties.
fn nearest_centroid(centroids: &[Cluster], cluster: &Cluster) -> Option<usize> {
    centroids
        .iter()
        .map(|centroid| centroid.distance(cluster))
        .enumerate()
        .min_by(|(left_index, left), (right_index, right)| {
            left.total_cmp(right).then(left_index.cmp(right_index))
        })
        .map(|(index, _)| index)
}

/// [`kmeans_clustering`] behind the [`Clusterer`] trait, with its parameters validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeansClusterer {
    num_clusters: usize,
    num_iterations: usize,
}

impl KMeansClusterer {
    /// # Errors
    ///
    /// [`ClusterError::InvalidClusterCount`] if `num_clusters` is zero.
    pub fn new(num_clusters: usize, num_iterations: usize) -> Result<KMeansClusterer, ClusterError> {
        if num_clusters == 0 {
            return Err(ClusterError::InvalidClusterCount {
                requested: num_clusters,
            });
        }
        Ok(KMeansClusterer {
            num_clusters,
            num_iterations,
        })
    }

    pub fn num_clusters(&self) -> usize {
        self.num_clusters
    }

    pub fn num_iterations(&self) -> usize {
        self.num_iterations
    }
}

impl Clusterer for KMeansClusterer {
    fn clusterize(&self, clusters: Vec<Cluster>) -> Result<Vec<Cluster>, ClusterError> {
        check_cluster_count(self.num_clusters, clusters.len())?;
        Ok(kmeans_clustering(
            &clusters,
            self.num_clusters,
            self.num_iterations,
        ))
    }
}
