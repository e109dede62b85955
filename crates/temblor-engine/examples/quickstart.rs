//! Temblor quickstart — configure, run, and summarise a simulation.
//!
//! Demonstrates:
//!   1. Building a SimConfig (lattice size, coupling, distributions)
//!   2. Running the relaxation/loading cycle to completion
//!   3. Reading avalanche statistics and sampled snapshots
//!
//! Run with:
//!   cargo run --example quickstart

use temblor_engine::{SimConfig, Simulation};
use temblor_grid::Neighborhood;

fn main() {
    let config = SimConfig {
        side: 25,
        alpha: 0.5,
        neighborhood: Neighborhood::Moore,
        additions: 2_000,
        snapshot_every: 50,
        seed: 7,
        ..SimConfig::default()
    };

    let run = Simulation::new(config).unwrap().run().unwrap();

    let sizes = &run.avalanche_sizes;
    let total: u64 = sizes.iter().sum();
    let mean = total as f64 / sizes.len() as f64;

    println!("passes run:         {}", run.metrics.passes);
    println!("loading events:     {}", run.metrics.loads);
    println!("avalanches:         {}", sizes.len());
    println!("mean avalanche:     {mean:.2}");
    println!("largest avalanche:  {}", run.metrics.largest_avalanche);
    println!("snapshots sampled:  {}", run.snapshots.len());

    // Coarse size distribution — criticality shows up as a heavy tail.
    let mut buckets = [0u64; 5];
    for &s in sizes {
        let b = match s {
            0..=1 => 0,
            2..=9 => 1,
            10..=99 => 2,
            100..=999 => 3,
            _ => 4,
        };
        buckets[b] += 1;
    }
    println!("size distribution (1 / <10 / <100 / <1000 / rest): {buckets:?}");
}
