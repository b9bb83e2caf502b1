//! # Levelgen Entry Point
//!
//! Seeds and runs the space partitioner once: read an optional JSON config,
//! assemble the root space, partition it with a seeded generator, and log a
//! summary of the resulting tree. Carving the leaves into actual rooms and
//! corridors belongs to a downstream map builder.

use std::env;
use std::error::Error;
use std::path::Path;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use levelgen::bsp::{Point3, Space, SpacePartitioner};
use levelgen::config::PartitionConfig;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();

    // Usage: levelgen [config.json] [seed]
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => PartitionConfig::from_file(Path::new(&path))?,
        None => PartitionConfig::default(),
    };
    let seed: u64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 0,
    };

    info!(
        "partitioning a {} x {} space (seed {})",
        config.root_length, config.root_width, seed
    );

    let root = Space::new(
        Point3::new(0.0, 0.0, 0.0),
        config.root_length,
        config.root_width,
    );
    let partitioner = SpacePartitioner::new(config);
    let mut rng = StdRng::seed_from_u64(seed);
    let tree = partitioner.partition(root, &mut rng)?;

    let leaves = tree.leaves();
    let smallest = leaves.iter().map(Space::area).fold(f64::INFINITY, f64::min);
    let largest = leaves.iter().map(Space::area).fold(0.0, f64::max);
    info!(
        "built tree: {} leaves, depth {}, leaf areas {:.2}..{:.2}",
        leaves.len(),
        tree.depth(),
        smallest,
        largest
    );

    Ok(())
}
