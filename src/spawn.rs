//! Particle placement strategies and seed-layout presets.
//!
//! A group is placed either uniformly at random over the board or
//! round-robin across a fixed list of seed positions, which produces
//! `seeds.len()` clusters of roughly equal size.
//!
//! # Example
//!
//! ```ignore
//! use plife::prelude::*;
//!
//! // Six clusters, two columns of three
//! GroupConfig::new("red", 400, palette::RED).with_seeds(&spawn::GRID_2X3)
//! ```

use glam::Vec2;
use rand::Rng;

use crate::particle::Particle;

/// One seed in the middle of the board.
pub const CENTER: [Vec2; 1] = [Vec2::new(0.5, 0.5)];

/// One seed in each corner.
pub const CORNERS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Four seeds at the quarter points.
pub const GRID_2X2: [Vec2; 4] = [
    Vec2::new(0.25, 0.25),
    Vec2::new(0.75, 0.25),
    Vec2::new(0.25, 0.75),
    Vec2::new(0.75, 0.75),
];

/// Six seeds in two columns of three.
pub const GRID_2X3: [Vec2; 6] = [
    Vec2::new(0.25, 0.25),
    Vec2::new(0.25, 0.5),
    Vec2::new(0.25, 0.75),
    Vec2::new(0.75, 0.25),
    Vec2::new(0.75, 0.5),
    Vec2::new(0.75, 0.75),
];

/// Place `count` particles, all with zero velocity.
///
/// With an empty seed list every position is drawn uniformly at random
/// over `[0, 1) x [0, 1)`. Otherwise particle `i` lands on seed
/// `i % seeds.len()`, so a seed list of length `k` yields `k` clusters
/// holding `count / k` particles each, plus one extra in the first
/// `count % k` clusters.
pub fn place_particles(count: usize, seeds: &[Vec2], rng: &mut impl Rng) -> Vec<Particle> {
    if seeds.is_empty() {
        (0..count)
            .map(|_| Particle::new(rng.gen(), rng.gen()))
            .collect()
    } else {
        (0..count)
            .map(|i| Particle::at(seeds[i % seeds.len()]))
            .collect()
    }
}
