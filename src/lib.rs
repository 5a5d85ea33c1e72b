//! # plife - Particle Life Engine
//!
//! CPU "particle life" simulations with a simple, declarative API.
//!
//! Colored particle groups attract and repel each other according to a
//! per-group-pair rule matrix; nothing more than that table plus distance
//! falloff produces cells, chasers, orbiters, and other emergent creatures.
//! plife owns the physics (pairwise forces, integration, boundary handling,
//! per-group parallelism) so a renderer only has to read positions and
//! colors back each frame.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plife::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Simulation::new()
//!         .with_group(GroupConfig::new("red", 400, palette::RED))
//!         .with_group(GroupConfig::new("green", 400, palette::GREEN))
//!         .with_group(GroupConfig::new("blue", 400, palette::BLUE))
//!         .with_matrix_mode(MatrixMode::Asymmetric)
//!         .with_seed(42)
//!         .build()?;
//!
//!     loop {
//!         let groups = engine.advance()?;
//!         // hand groups[..] to your renderer
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Groups
//!
//! A [`GroupConfig`] names a group, sets its particle count and display
//! color, and optionally clusters it on seed positions (see [`spawn`] for
//! presets). Groups are installed once per setup; counts never change
//! between setups.
//!
//! ### The rule matrix
//!
//! [`RuleMatrix`] holds one signed coefficient per ordered group pair:
//! positive attracts, negative repels. Generate it symmetric (mutual
//! feelings) or asymmetric (unrequited ones) with [`MatrixMode`], or build
//! one by hand for exact control. The matrix can be exported as CSV, JSON,
//! or a PNG heat tile for inspection.
//!
//! ### The tick
//!
//! [`SimulationEngine::advance`] runs one fork-join sweep: one task per
//! group, each reading a pre-tick position snapshot and writing only its
//! own particles. Velocity folds force and damping into a single
//! multiplicative step, is clamped to a terminal velocity, and positions
//! either wrap toroidally or reflect off the walls.
//!
//! ### Determinism
//!
//! Every randomized operation draws from a master seed supplied at build
//! time. The same seed and configuration replay the same run, parallel or
//! not.
//!
//! ### Driving
//!
//! Pause and single-step state lives outside the engine. [`Runner`] is a
//! minimal headless driver holding those flags; interactive front ends can
//! use it directly or reimplement its three-line policy.

mod error;
mod group;
mod particle;
mod runner;
mod simulation;

pub mod palette;
pub mod rules;
pub mod spawn;

pub use error::{ConfigError, ExportError, SimulationError};
pub use glam::{Vec2, Vec3};
pub use group::{GroupConfig, ParticleGroup};
pub use particle::Particle;
pub use rules::{MatrixMode, RuleMatrix};
pub use runner::Runner;
pub use simulation::{Params, Simulation, SimulationEngine};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use plife::prelude::*;
/// ```
///
/// This imports:
/// - [`Simulation`] - the simulation builder
/// - [`SimulationEngine`] - the tick-by-tick engine
/// - [`GroupConfig`], [`ParticleGroup`], [`Particle`] - the data model
/// - [`RuleMatrix`], [`MatrixMode`] - group-pair attraction rules
/// - [`Params`] - physics tunables
/// - [`Runner`] - headless pause/step driver
/// - [`palette`], [`spawn`] - colors and seed layouts
/// - [`Vec2`], [`Vec3`] - glam vector types
pub mod prelude {
    pub use crate::error::{ConfigError, ExportError, SimulationError};
    pub use crate::group::{GroupConfig, ParticleGroup};
    pub use crate::palette;
    pub use crate::particle::Particle;
    pub use crate::rules::{MatrixMode, RuleMatrix};
    pub use crate::runner::Runner;
    pub use crate::simulation::{Params, Simulation, SimulationEngine};
    pub use crate::spawn;
    pub use crate::{Vec2, Vec3};
}
