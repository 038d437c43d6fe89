use crate::arena::ClusterHandle;
use thiserror::Error;

/// Errors raised while building clusters from input records or while running
/// a validated clusterer.
///
/// The free driver functions never return these: out-of-range parameters are
/// a precondition there and only produce degenerate output.
#[derive(Debug, Error, PartialEq)]
pub enum ClusterError {
    #[error("Record {id} has a non-finite center")]
    NonFiniteCoordinate { id: String },

    #[error("Record {id} has an invalid baseline error {value}")]
    InvalidError {
        /// Identifier of the offending record.
        id: String,
        /// The rejected error value (negative or not finite).
        value: f64,
    },

    #[error("Invalid cluster count {requested}, at least one cluster is required")]
    InvalidClusterCount { requested: usize },

    #[error("Requested {requested} clusters from a list of {available}")]
    NotEnoughClusters { requested: usize, available: usize },

    #[error("Cluster handle {0} was already retired")]
    RetiredHandle(ClusterHandle),

    #[error("Cluster handle {0} cannot be merged into itself")]
    SelfMerge(ClusterHandle),
}
