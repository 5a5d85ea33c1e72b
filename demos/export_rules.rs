//! # Rule-matrix export
//!
//! Generates a symmetric rule matrix for six groups and writes it out in
//! every supported format: CSV on stdout and disk, JSON, and the one-pixel-
//! per-cell PNG heat tile (red = repulsion, blue = attraction).
//!
//! Run with: `cargo run --example export_rules -- [seed]`

use plife::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut rng = SmallRng::seed_from_u64(seed);
    let rules = RuleMatrix::symmetric(6, &mut rng);

    println!("=== plife: rule matrix export (seed {}) ===", seed);
    println!();
    print!("{}", rules.to_csv());
    println!();

    rules.write_csv("rules.csv")?;
    rules.write_png("rules.png")?;
    std::fs::write("rules.json", rules.to_json()?)?;

    println!("Wrote rules.csv, rules.json, rules.png");
    Ok(())
}
