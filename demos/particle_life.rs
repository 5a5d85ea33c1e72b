//! # Classic six-group particle life, headless
//!
//! The canonical configuration: red, green, blue, yellow, white, and teal
//! groups seeded in two columns, an asymmetric rule matrix, and a wrapped
//! board. Runs a fixed number of ticks and reports swarm statistics, which
//! is enough to watch structure emerge without a renderer.
//!
//! Run with: `cargo run --example particle_life --release -- [ticks] [seed]`

use plife::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1000);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let per_group = 200;
    let colors = [
        ("red", palette::RED),
        ("green", palette::GREEN),
        ("blue", palette::BLUE),
        ("yellow", palette::YELLOW),
        ("white", palette::WHITE),
        ("teal", palette::TEAL),
    ];

    let mut sim = Simulation::new()
        .with_matrix_mode(MatrixMode::Asymmetric)
        .with_seed(seed);
    for (name, color) in colors {
        sim = sim.with_group(GroupConfig::new(name, per_group, color).with_seeds(&spawn::GRID_2X3));
    }
    let mut runner = Runner::new(sim.build()?);

    println!("=== plife: six-group particle life ===");
    println!("Particles: {} x 6 groups", per_group);
    println!("Seed: {}  Ticks: {}", seed, ticks);
    println!();

    let started = std::time::Instant::now();
    for tick in 1..=ticks {
        let groups = runner.frame()?.expect("runner starts unpaused");
        if tick % (ticks / 10).max(1) == 0 {
            report(tick, groups);
        }
    }

    let elapsed = started.elapsed();
    println!();
    println!(
        "{} ticks in {:.2?} ({:.0} ticks/s)",
        ticks,
        elapsed,
        ticks as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

fn report(tick: u64, groups: &[ParticleGroup]) {
    let mut speed_sum = 0.0f32;
    let mut count = 0usize;
    for group in groups {
        for p in &group.particles {
            speed_sum += p.velocity.length();
            count += 1;
        }
    }
    println!(
        "tick {:>6}  mean speed {:.6}  ({} particles)",
        tick,
        speed_sum / count as f32,
        count
    );
}
