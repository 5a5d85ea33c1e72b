//! The particle data type.
//!
//! A particle is a point with a position and a velocity, both in normalized
//! board coordinates. The engine owns all particle mutation; everything else
//! only reads positions for rendering.

use glam::Vec2;

/// A single simulated point.
///
/// Positions are normalized: both components live in `[0, 1)` and renderers
/// scale them to pixels themselves. Velocities are per-tick displacements,
/// clamped each tick to the engine's terminal velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in normalized board coordinates.
    pub position: Vec2,
    /// Per-tick displacement, clamped to the terminal velocity.
    pub velocity: Vec2,
}

impl Particle {
    /// Create a particle at `(x, y)` with zero velocity.
    pub fn new(x: f32, y: f32) -> Self {
        Self::at(Vec2::new(x, y))
    }

    /// Create a particle at `position` with zero velocity.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }
}
