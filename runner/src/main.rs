extern crate closest_pair_clustering;

use clap::{Parser, Subcommand};
use closest_pair_clustering::{
    compute_distortion, fast_closest_pair, slow_closest_pair, Cluster, ClusterError, Clusterer,
    HierarchicalClusterer, KMeansClusterer, SequentialClusterer,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Experiments on synthetic weighted point sets.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
    /// Seed for the synthetic data generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Write tab-separated results to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Worker threads for the distortion sweep
    #[arg(long, default_value_t = 6)]
    threads: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time slow and fast closest pair on random lists of 2..=size clusters
    Bench {
        #[arg(long, default_value_t = 200)]
        size: usize,
    },
    /// Compare the distortion of each clustering strategy over a range of cluster counts
    Distortion {
        #[arg(long, default_value_t = 111)]
        size: usize,
        #[arg(long, default_value_t = 6)]
        min_clusters: usize,
        #[arg(long, default_value_t = 20)]
        max_clusters: usize,
        /// K-means iterations
        #[arg(long, default_value_t = 5)]
        iterations: usize,
    },
}

/// Zero-population clusters spread uniformly over the square [-1, 1] x [-1, 1].
fn gen_random_clusters(rng: &mut StdRng, count: usize) -> Vec<Cluster> {
    (0..count)
        .map(|i| {
            Cluster::singleton(
                i.to_string(),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                0,
                0.0,
            )
        })
        .collect()
}

/// County-like singletons: map-sized coordinates and skewed populations.
fn gen_weighted_clusters(rng: &mut StdRng, count: usize) -> Vec<Cluster> {
    (0..count)
        .map(|i| {
            let population = 10f64.powf(rng.gen_range(3.0..6.5)) as u64;
            Cluster::singleton(
                format!("{i:05}"),
                rng.gen_range(0.0..1000.0),
                rng.gen_range(0.0..630.0),
                population,
                0.0,
            )
        })
        .collect()
}

fn bench(rng: &mut StdRng, size: usize, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Clusters\tSlowTime(s)\tFastTime(s)\tDistance")?;
    for count in 2..=size {
        let mut clusters = gen_random_clusters(rng, count);

        let now = Instant::now();
        let slow = slow_closest_pair(&clusters);
        let slow_time = now.elapsed();

        let now = Instant::now();
        let fast = fast_closest_pair(&mut clusters);
        let fast_time = now.elapsed();

        if fast.distance != slow.distance {
            log::warn!(
                "closest pair distances differ for {count} clusters: slow {} fast {}",
                slow.distance,
                fast.distance
            );
        }
        writeln!(
            out,
            "{}\t{:.10}\t{:.10}\t{:.10}",
            count,
            slow_time.as_secs_f64(),
            fast_time.as_secs_f64(),
            fast.distance
        )?;
    }
    Ok(())
}

fn distortion(
    rng: &mut StdRng,
    size: usize,
    cluster_counts: std::ops::RangeInclusive<usize>,
    iterations: usize,
    threads: usize,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    let singletons = gen_weighted_clusters(rng, size);
    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;

    // Each run gets its own copy of the singletons.
    let rows = pool.install(|| {
        cluster_counts
            .into_par_iter()
            .map(|count| -> Result<(usize, Vec<f64>), ClusterError> {
                let clusterers: [Box<dyn Clusterer>; 3] = [
                    Box::new(HierarchicalClusterer::new(count)?),
                    Box::new(KMeansClusterer::new(count, iterations)?),
                    Box::new(SequentialClusterer::new(count)?),
                ];
                let mut row = Vec::with_capacity(clusterers.len());
                for clusterer in &clusterers {
                    let clusters = clusterer.clusterize(singletons.clone())?;
                    row.push(compute_distortion(&clusters));
                }
                Ok((count, row))
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    writeln!(out, "Clusters\tHierarchical\tKMeans\tSequential")?;
    for (count, row) in rows {
        writeln!(
            out,
            "{}\t{:.4e}\t{:.4e}\t{:.4e}",
            count, row[0], row[1], row[2]
        )?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let now = Instant::now();
    match args.command {
        Command::Bench { size } => bench(&mut rng, size, &mut out)?,
        Command::Distortion {
            size,
            min_clusters,
            max_clusters,
            iterations,
        } => distortion(
            &mut rng,
            size,
            min_clusters..=max_clusters,
            iterations,
            args.threads,
            &mut out,
        )?,
    }
    log::info!("finished in {:?}", now.elapsed());
    Ok(())
}
