//! Ring Recall Example
//!
//! Stores two 10x10 ring bitmaps, corrupts one of them and lets the network
//! relax the noisy copy back to a stored ring.
//!
//! Run with: cargo run --example ring_recall

use hopfield_memory::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const RING: &str = "
    . . . . . . . . . .
    . . . # # # . . . .
    . . # . . . # . . .
    . # . . . . . # . .
    . # . . . . . # . .
    . # . . . . . # . .
    . . # . . . # . . .
    . . . # # # . . . .
    . . . . . . . . . .
    . . . . . . . . . .
";

const SHIFTED_RING: &str = "
    . . . . . . . . . .
    . . . . # # # . . .
    . . . # . . . # . .
    . . # . . . . . # .
    . # . . . . . . # .
    . # . . . . . . # .
    . . # . . . . # . .
    . . . # # # . . . .
    . . . . . . . . . .
    . . . . . . . . . .
";

fn print_grid(pattern: &[f64], width: usize) {
    for row in pattern.chunks(width) {
        let line: String = row
            .iter()
            .map(|&x| if x > 0.0 { "# " } else { ". " })
            .collect();
        println!("  {}", line.trim_end());
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("===========================================");
    println!("  Hopfield Network Ring Recall");
    println!("===========================================\n");

    let grid = AsciiGrid::new(10, 10);
    let patterns = grid.encode_all([RING, SHIFTED_RING])?;

    let mut network = HopfieldNetwork::new(grid.dimension())?;
    network.train(&patterns)?;
    println!(
        "Stored {} patterns over {} neurons\n",
        network.pattern_count(),
        network.dimension()
    );

    let mut rng = StdRng::seed_from_u64(7);
    let noisy = flip_random(&patterns[0], 8, &mut rng);
    println!("Noisy input ({} pixels flipped):", hamming_distance(&noisy, &patterns[0]));
    print_grid(&noisy, grid.width);

    let result = network.recall_detailed(&noisy)?;
    println!("\nRecalled after {} sweeps ({} flips):", result.sweeps, result.flips);
    print_grid(&result.pattern, grid.width);

    match result.matched_index {
        Some(index) => println!("\nMatches stored pattern #{}", index),
        None => println!("\nSpurious state (no stored pattern matched)"),
    }
    println!("Energy: {:.1}", result.energy);

    Ok(())
}
