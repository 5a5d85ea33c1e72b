//! Particle groups: named, colored sets sharing one rule-matrix identity.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::particle::Particle;
use crate::spawn;

/// Builder-side description of a particle group.
///
/// # Example
///
/// ```ignore
/// GroupConfig::new("red", 400, palette::RED).with_seeds(&spawn::GRID_2X3)
/// ```
#[derive(Clone, Debug)]
pub struct GroupConfig {
    /// Group identifier. Conventionally unique, not enforced.
    pub name: String,
    /// Number of particles to place.
    pub count: usize,
    /// Display color, RGB in `[0, 1]`.
    pub color: Vec3,
    /// Seed positions for clustered placement; empty means uniform random.
    pub seeds: Vec<Vec2>,
}

impl GroupConfig {
    /// Describe a group placed uniformly at random.
    pub fn new(name: impl Into<String>, count: usize, color: Vec3) -> Self {
        Self {
            name: name.into(),
            count,
            color,
            seeds: Vec::new(),
        }
    }

    /// Cluster the group round-robin across `seeds` instead.
    ///
    /// See the presets in [`spawn`] for common layouts.
    pub fn with_seeds(mut self, seeds: &[Vec2]) -> Self {
        self.seeds = seeds.to_vec();
        self
    }
}

/// A named, colored collection of particles.
///
/// The particle count is fixed from creation until the engine is cleared.
/// [`reset_position`](ParticleGroup::reset_position) snaps the group back to
/// its seed layout (or to fresh random positions when it has none), which
/// also restarts every velocity at zero.
#[derive(Clone, Debug)]
pub struct ParticleGroup {
    /// Group identifier.
    pub name: String,
    /// Display color, RGB in `[0, 1]`.
    pub color: Vec3,
    /// The group's particles. Mutated only by the engine.
    pub particles: Vec<Particle>,
    seeds: Vec<Vec2>,
}

impl ParticleGroup {
    pub(crate) fn from_config(config: &GroupConfig, rng: &mut impl Rng) -> Self {
        Self {
            name: config.name.clone(),
            color: config.color,
            particles: spawn::place_particles(config.count, &config.seeds, rng),
            seeds: config.seeds.clone(),
        }
    }

    /// Place the particles back on the stored seed layout, preserving count.
    ///
    /// Groups without a seed layout get fresh uniform-random positions.
    pub fn reset_position(&mut self, rng: &mut impl Rng) {
        self.particles = spawn::place_particles(self.particles.len(), &self.seeds, rng);
    }

    /// Number of particles in the group.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the group holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_config_places_on_seeds() {
        let mut rng = SmallRng::seed_from_u64(5);
        let config = GroupConfig::new("red", 8, palette::RED).with_seeds(&spawn::GRID_2X2);
        let group = ParticleGroup::from_config(&config, &mut rng);

        assert_eq!(group.name, "red");
        assert_eq!(group.len(), 8);
        for (i, p) in group.particles.iter().enumerate() {
            assert_eq!(p.position, spawn::GRID_2X2[i % 4]);
        }
    }

    #[test]
    fn test_reset_position_restores_layout_and_zeroes_velocity() {
        let mut rng = SmallRng::seed_from_u64(5);
        let config = GroupConfig::new("red", 4, palette::RED).with_seeds(&spawn::CENTER);
        let mut group = ParticleGroup::from_config(&config, &mut rng);

        for p in &mut group.particles {
            p.position = Vec2::new(0.1, 0.9);
            p.velocity = Vec2::new(0.02, -0.02);
        }

        group.reset_position(&mut rng);
        assert_eq!(group.len(), 4);
        for p in &group.particles {
            assert_eq!(p.position, spawn::CENTER[0]);
            assert_eq!(p.velocity, Vec2::ZERO);
        }
    }
}
