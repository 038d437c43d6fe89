#[cfg(test)]
mod test {
    extern crate closest_pair_clustering;
    use closest_pair_clustering::{
        compute_distortion, fast_closest_pair, hierarchical_clustering, kmeans_clustering,
        recompute_distortion, singletons, slow_closest_pair, Centered, Cluster, Clusterer,
        HierarchicalClusterer, KMeansClusterer, PointRecord, SequentialClusterer,
    };
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    const SEED: u64 = 42;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn generate_records(rng: &mut StdRng, count: usize) -> Vec<PointRecord> {
        (0..count)
            .map(|i| {
                PointRecord::new(
                    format!("{i:05}"),
                    rng.gen_range(0.0..1000.0),
                    rng.gen_range(0.0..600.0),
                    rng.gen_range(1_000..500_000),
                    0.0,
                )
            })
            .collect()
    }

    fn generate_clusters(rng: &mut StdRng, count: usize) -> Vec<Cluster> {
        singletons(&generate_records(rng, count)).unwrap()
    }

    #[test]
    fn fast_and_slow_closest_pair_agree() {
        let mut rng = StdRng::seed_from_u64(SEED);
        for size in 0..=50 {
            for _ in 0..10 {
                let mut clusters = generate_clusters(&mut rng, size);
                let fast = fast_closest_pair(&mut clusters);
                let slow = slow_closest_pair(&clusters);
                assert_eq!(fast, slow, "mismatch for {size} clusters");
            }
        }
    }

    #[test]
    fn grid_closest_pair_has_unit_distance() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut grid: Vec<Cluster> = (0..8)
            .flat_map(|x| (0..8).map(move |y| (x, y)))
            .map(|(x, y)| Cluster::singleton(format!("{x}-{y}"), x as f64, y as f64, 1, 0.0))
            .collect();
        grid.shuffle(&mut rng);

        let fast = fast_closest_pair(&mut grid);
        let slow = slow_closest_pair(&grid);

        assert_eq!(fast.distance, 1.0);
        assert_eq!(slow.distance, 1.0);
        let (lo, hi) = fast.indices().unwrap();
        assert_eq!(grid[lo].distance(&grid[hi]), 1.0);
    }

    #[test]
    fn closest_pair_is_invariant_under_translation() {
        let mut rng = StdRng::seed_from_u64(SEED);
        for size in [2, 5, 17, 64, 200] {
            let clusters = generate_clusters(&mut rng, size);
            let shifted: Vec<Cluster> = clusters
                .iter()
                .map(|c| {
                    Cluster::new(
                        c.members().clone(),
                        c.horiz_center() + 1024.0,
                        c.vert_center() - 512.0,
                        c.total_population(),
                        c.error(),
                    )
                })
                .collect();

            assert_eq!(
                slow_closest_pair(&clusters).indices(),
                slow_closest_pair(&shifted).indices()
            );

            let (mut clusters, mut shifted) = (clusters, shifted);
            assert_eq!(
                fast_closest_pair(&mut clusters).indices(),
                fast_closest_pair(&mut shifted).indices()
            );
        }
    }

    #[test]
    fn merge_conserves_population_and_members() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let clusters = generate_clusters(&mut rng, 40);
        for pair in clusters.chunks(2) {
            let mut merged = pair[0].clone();
            merged.merge_clusters(&pair[1]);

            assert_eq!(
                merged.total_population(),
                pair[0].total_population() + pair[1].total_population()
            );
            let union: Vec<&String> = pair[0].members().union(pair[1].members()).collect();
            assert_eq!(merged.members().iter().collect::<Vec<_>>(), union);
            assert!(merged.error() >= pair[0].error() + pair[1].error());
        }
    }

    #[test]
    fn hierarchical_clustering_reaches_every_target() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(SEED);
        let clusters = generate_clusters(&mut rng, 30);
        let total: u64 = clusters.iter().map(Cluster::total_population).sum();

        for target in 1..=clusters.len() {
            let result = hierarchical_clustering(clusters.clone(), target);
            assert_eq!(result.len(), target);
            assert_eq!(
                result.iter().map(Cluster::total_population).sum::<u64>(),
                total
            );
        }
    }

    #[test]
    fn hierarchical_distortion_never_decreases() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let mut clusters = generate_clusters(&mut rng, 60);
        let mut previous = compute_distortion(&clusters);

        for target in (1..60).rev() {
            clusters = hierarchical_clustering(clusters, target);
            let distortion = compute_distortion(&clusters);
            assert!(
                distortion >= previous,
                "distortion dropped from {previous} to {distortion} at {target} clusters"
            );
            previous = distortion;
        }
    }

    #[test]
    fn accumulated_distortion_matches_records() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let records = generate_records(&mut rng, 111);
        let clusters = singletons(&records).unwrap();

        for result in [
            hierarchical_clustering(clusters.clone(), 9),
            kmeans_clustering(&clusters, 9, 5),
        ] {
            let accumulated = compute_distortion(&result);
            let recomputed = recompute_distortion(&result, &records);
            assert!(
                (accumulated - recomputed).abs() <= 1e-9 * recomputed.max(1.0),
                "accumulated {accumulated} vs recomputed {recomputed}"
            );
        }
    }

    #[test]
    fn kmeans_without_iterations_returns_largest_clusters() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let clusters = generate_clusters(&mut rng, 50);
        let mut expected = clusters.clone();
        expected.sort_by(|a, b| b.total_population().cmp(&a.total_population()));
        expected.truncate(7);

        assert_eq!(kmeans_clustering(&clusters, 7, 0), expected);
    }

    #[test]
    fn kmeans_assigns_every_cluster_once() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(SEED);
        let clusters = generate_clusters(&mut rng, 200);
        let total: u64 = clusters.iter().map(Cluster::total_population).sum();

        let result = kmeans_clustering(&clusters, 15, 5);

        assert_eq!(result.len(), 15);
        assert_eq!(
            result.iter().map(Cluster::total_population).sum::<u64>(),
            total
        );
        assert_eq!(
            result.iter().map(|c| c.members().len()).sum::<usize>(),
            clusters.len()
        );
    }

    #[test]
    fn clusterers_are_interchangeable() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let clusters = generate_clusters(&mut rng, 100);
        let clusterers: Vec<Box<dyn Clusterer>> = vec![
            Box::new(HierarchicalClusterer::new(12).unwrap()),
            Box::new(KMeansClusterer::new(12, 5).unwrap()),
            Box::new(SequentialClusterer::new(12).unwrap()),
        ];

        for clusterer in clusterers {
            let result = clusterer.clusterize(clusters.clone()).unwrap();
            assert_eq!(result.len(), 12);
            assert!(compute_distortion(&result) > 0.0);
        }
    }
}
