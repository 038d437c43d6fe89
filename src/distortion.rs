use crate::cluster::{Centered, Cluster, PointRecord};

/// Total distortion of a clustering: the sum of every cluster's accumulated error.
pub fn compute_distortion(clusters: &[Cluster]) -> f64 {
    clusters.iter().map(Cluster::error).sum()
}

/// Recomputes a cluster's distortion from the fine-grained records it covers.
///
/// Each record whose id is a member contributes its baseline error plus its
/// population times the squared distance to the cluster center. For clusters
/// built by merging singletons this matches [`Cluster::error`] up to rounding.
pub fn cluster_error(cluster: &Cluster, records: &[PointRecord]) -> f64 {
    records
        .iter()
        .filter(|record| cluster.members().contains(&record.id))
        .map(|record| {
            record.baseline_error + record.population as f64 * cluster.squared_distance(record)
        })
        .sum()
}

/// [`cluster_error`] summed over a whole clustering.
pub fn recompute_distortion(clusters: &[Cluster], records: &[PointRecord]) -> f64 {
    clusters
        .iter()
        .map(|cluster| cluster_error(cluster, records))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::singletons;

    #[test]
    fn merged_error_matches_recomputed_error() {
        let records = vec![
            PointRecord::new("a", 0.0, 0.0, 4, 0.5),
            PointRecord::new("b", 3.0, 0.0, 2, 0.25),
            PointRecord::new("c", 1.0, 6.0, 3, 0.0),
        ];
        let mut clusters = singletons(&records).unwrap();
        let c = clusters.pop().unwrap();
        let b = clusters.pop().unwrap();
        let mut merged = clusters.pop().unwrap();
        merged.merge_clusters(&b).merge_clusters(&c);

        let recomputed = cluster_error(&merged, &records);

        assert!((merged.error() - recomputed).abs() < 1e-9);
    }

    #[test]
    fn singletons_have_only_baseline_distortion() {
        let records = vec![
            PointRecord::new("a", 0.0, 0.0, 4, 0.5),
            PointRecord::new("b", 3.0, 0.0, 2, 0.25),
        ];
        let clusters = singletons(&records).unwrap();

        assert_eq!(compute_distortion(&clusters), 0.75);
        assert_eq!(recompute_distortion(&clusters, &records), 0.75);
    }

    #[test]
    fn records_outside_the_cluster_are_ignored() {
        let records = vec![
            PointRecord::new("in", 2.0, 0.0, 1, 0.0),
            PointRecord::new("out", 100.0, 0.0, 1000, 9.0),
        ];
        let cluster = Cluster::singleton("in", 0.0, 0.0, 1, 0.0);

        assert_eq!(cluster_error(&cluster, &records), 4.0);
    }
}
