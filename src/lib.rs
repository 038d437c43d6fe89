//! Clustering of weighted points in the plane.
//!
//! Every input record becomes a singleton [`Cluster`]. Clusters are compared by
//! the Euclidean distance between their population-weighted centers, and the
//! closest pair can be found either exhaustively ([`slow_closest_pair`]) or
//! with the divide-and-conquer algorithm ([`fast_closest_pair`]). On top of
//! that primitive sit the clustering strategies:
//!
//! * [`hierarchical_clustering`] repeatedly merges the globally closest pair;
//! * [`kmeans_clustering`] refines centroids seeded from the most populous clusters;
//! * [`sequential_clustering`] merges contiguous runs of the input as a baseline.
//!
//! Merging keeps the weighted centroid, the total population and the
//! accumulated distortion exact, so a clustering can be scored with
//! [`compute_distortion`] without revisiting the original records.
//!
//! # Example
//!
//! ```
//! use closest_pair_clustering::{hierarchical_clustering, singletons, PointRecord};
//!
//! let records = vec![
//!     PointRecord::new("a", 0.0, 0.0, 10, 0.0),
//!     PointRecord::new("b", 1.0, 0.0, 10, 0.0),
//!     PointRecord::new("c", 50.0, 50.0, 5, 0.0),
//! ];
//! let clusters = hierarchical_clustering(singletons(&records).unwrap(), 2);
//!
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].total_population(), 20);
//! ```

pub mod arena;
pub mod closest_pair;
pub mod cluster;
pub mod clusterer;
pub mod distortion;
pub mod error;

pub use arena::{ClusterArena, ClusterHandle};
pub use closest_pair::{
    closest_pair_strip, fast_closest_pair, pair_distance, slow_closest_pair, ClusterPair,
};
pub use cluster::{singletons, Centered, Cluster, PointRecord};
pub use clusterer::{
    hierarchical_clustering, kmeans_clustering, sequential_clustering, Clusterer,
    HierarchicalClusterer, KMeansClusterer, SequentialClusterer,
};
pub use distortion::{cluster_error, compute_distortion, recompute_distortion};
pub use error::ClusterError;
