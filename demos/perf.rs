//! Performance profiling example for query_nearest
//!
//! Builds a large index and runs intensive nearest-neighbor queries.
//! Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf
//! ```

use kdtree::prelude::*;
use std::time::Instant;

const DIM: usize = 3;

/// Simple LCG so the demo needs no dependencies
fn next(rng: &mut u64) -> f64 {
    *rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    ((*rng >> 32) as f64 / f64::from(u32::MAX)) * 1000.0
}

fn main() {
    println!("Generating 1 million random {}D points...", DIM);
    let mut rng = 12345u64;
    let points: Vec<Vec<f64>> = (0..1_000_000)
        .map(|_| (0..DIM).map(|_| next(&mut rng)).collect())
        .collect();

    let build_start = Instant::now();
    let tree = KdTree::build_with(&points, 20, 8).unwrap();
    let build_duration = build_start.elapsed();

    let query_start = Instant::now();
    let mut checksum = 0.0;
    for _ in 0..100_000 {
        let query: Vec<f64> = (0..DIM).map(|_| next(&mut rng)).collect();
        let hit = tree.query_nearest(&query).unwrap();
        checksum += hit.distance;
    }
    let query_duration = query_start.elapsed();

    println!(
        "\nCompleted 100,000 queries in {:.2}ms ({:.2}µs per query, checksum {:.2})",
        query_duration.as_secs_f64() * 1000.0,
        query_duration.as_secs_f64() * 1_000_000.0 / 100_000.0,
        checksum
    );

    println!("\nProfile Summary:");
    println!("  Building: {:.2}ms", build_duration.as_secs_f64() * 1000.0);
    println!("  Querying: {:.2}ms", query_duration.as_secs_f64() * 1000.0);
    println!(
        "  Total:    {:.2}ms",
        (build_duration + query_duration).as_secs_f64() * 1000.0
    );
}
