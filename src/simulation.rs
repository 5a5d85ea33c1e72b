//! Simulation builder and engine.
//!
//! [`Simulation`] is the configuration surface: add groups, pick how the
//! rule matrix is generated, set physics parameters, then call `.build()`.
//! [`SimulationEngine`] owns all particle state and advances it one tick at
//! a time; an external driver calls [`advance`](SimulationEngine::advance)
//! once per rendered frame and reads positions and colors from the returned
//! view.
//!
//! # Tick anatomy
//!
//! Every tick copies all positions into a snapshot arena, then fans out one
//! task per group. A task mutates only its own group's particles and reads
//! only the snapshot, so forces this tick are computed against positions
//! from before anything moved. The join at the end of the fan-out makes
//! ticks strictly ordered; there is no inter-tick pipelining.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SimulationError};
use crate::group::{GroupConfig, ParticleGroup};
use crate::rules::{MatrixMode, RuleMatrix};

/// Highest position a reflected particle can occupy: one representable
/// step inside the upper bound.
const UPPER_BOUND: f32 = 1.0 - f32::EPSILON;

/// Per-group stream constant for deriving tick RNGs (splitmix64 increment).
const GROUP_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Physics tunables, fixed for a run.
///
/// The defaults are the classic configuration: a wrapped board, a force
/// cutoff at 0.2 board widths, and damping heavy enough to keep the swarm
/// from exploding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Squared distance beyond which pair forces are ignored. The cutoff is
    /// hard, not smoothed.
    pub max_effect_distance_sq: f32,
    /// Hard per-axis speed cap, applied every tick with the sign preserved.
    pub terminal_velocity: f32,
    /// Multiplicative factor applied to velocity-plus-force each tick. One
    /// step both injects the new force and damps prior velocity.
    pub momentum: f32,
    /// Magnitude of the random jitter applied when two particles coincide
    /// exactly. Zero disables the jitter.
    pub repulsion: f32,
    /// Toroidal wrapping when true, elastic reflection when false.
    pub wrapped: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_effect_distance_sq: 0.04,
            terminal_velocity: 0.05,
            momentum: 0.0002,
            repulsion: 0.004,
            wrapped: true,
        }
    }
}

/// A particle life simulation builder.
///
/// Use method chaining to configure, then call `.build()` to get a ready
/// [`SimulationEngine`].
///
/// # Example
///
/// ```ignore
/// let mut engine = Simulation::new()
///     .with_group(GroupConfig::new("red", 400, palette::RED))
///     .with_group(GroupConfig::new("green", 400, palette::GREEN))
///     .with_matrix_mode(MatrixMode::Asymmetric)
///     .with_seed(42)
///     .build()?;
///
/// let groups = engine.advance()?;
/// ```
pub struct Simulation {
    params: Params,
    configs: Vec<GroupConfig>,
    mode: MatrixMode,
    matrix: Option<RuleMatrix>,
    seed: Option<u64>,
    parallel: bool,
}

impl Simulation {
    /// Create a builder with default parameters and no groups.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
            configs: Vec::new(),
            mode: MatrixMode::Symmetric,
            matrix: None,
            seed: None,
            parallel: true,
        }
    }

    /// Set the physics parameters.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Add a particle group.
    pub fn with_group(mut self, config: GroupConfig) -> Self {
        self.configs.push(config);
        self
    }

    /// Choose how the rule matrix is generated at build time.
    pub fn with_matrix_mode(mut self, mode: MatrixMode) -> Self {
        self.mode = mode;
        self
    }

    /// Install a hand-built rule matrix instead of generating one.
    ///
    /// The matrix dimension must equal the number of groups; `build`
    /// reports a mismatch as [`ConfigError::MatrixDimension`].
    pub fn with_matrix(mut self, matrix: RuleMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Seed the master random source, making the whole run reproducible.
    ///
    /// Without a seed, one is drawn from the thread RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Toggle the per-group fork-join (on by default).
    ///
    /// The serial path produces bit-identical results for the same seed;
    /// turning parallelism off is only interesting for verification.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration and return a ready engine.
    ///
    /// Placement, rule generation, and one warm-up force pass all happen
    /// here, so the first [`advance`](SimulationEngine::advance) already
    /// sees moving particles.
    pub fn build(self) -> Result<SimulationEngine, ConfigError> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut engine = SimulationEngine::new(self.params, seed);
        engine.set_parallel(self.parallel);
        match self.matrix {
            Some(matrix) => engine.setup_with_matrix(&self.configs, matrix)?,
            None => engine.setup(&self.configs, self.mode)?,
        }
        Ok(engine)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of all particle groups and the rule matrix.
///
/// Create one through [`Simulation::build`], or construct an unconfigured
/// engine with [`new`](SimulationEngine::new) and call
/// [`setup`](SimulationEngine::setup) yourself. Driving a cleared or
/// never-configured engine fails fast with
/// [`SimulationError::NotConfigured`] rather than computing over empty
/// state.
#[derive(Debug)]
pub struct SimulationEngine {
    params: Params,
    groups: Vec<ParticleGroup>,
    matrix: Option<RuleMatrix>,
    rng: SmallRng,
    parallel: bool,
    /// Pre-sized position arena refilled at the start of every tick. Never
    /// reallocated mid-tick, so the fan-out reads a stable container.
    snapshot: Vec<Vec<Vec2>>,
}

impl SimulationEngine {
    /// Create an engine with no groups or rules installed.
    ///
    /// `seed` drives every randomized operation: placement, rule
    /// generation, and coincidence jitter. Two engines built from the same
    /// seed and configuration replay the same run.
    pub fn new(params: Params, seed: u64) -> Self {
        Self {
            params,
            groups: Vec::new(),
            matrix: None,
            rng: SmallRng::seed_from_u64(seed),
            parallel: true,
            snapshot: Vec::new(),
        }
    }

    /// Install groups and a freshly generated rule matrix.
    ///
    /// Runs one warm-up force pass so velocities are non-zero before the
    /// first rendered frame. Replaces any previous configuration wholesale.
    pub fn setup(&mut self, configs: &[GroupConfig], mode: MatrixMode) -> Result<(), ConfigError> {
        validate_configs(configs)?;
        let matrix = match mode {
            MatrixMode::Symmetric => RuleMatrix::symmetric(configs.len(), &mut self.rng),
            MatrixMode::Asymmetric => RuleMatrix::asymmetric(configs.len(), &mut self.rng),
        };
        self.install(configs, matrix);
        Ok(())
    }

    /// Install groups and a caller-built rule matrix.
    pub fn setup_with_matrix(
        &mut self,
        configs: &[GroupConfig],
        matrix: RuleMatrix,
    ) -> Result<(), ConfigError> {
        validate_configs(configs)?;
        if matrix.size() != configs.len() {
            return Err(ConfigError::MatrixDimension {
                expected: configs.len(),
                actual: matrix.size(),
            });
        }
        self.install(configs, matrix);
        Ok(())
    }

    fn install(&mut self, configs: &[GroupConfig], matrix: RuleMatrix) {
        self.groups = configs
            .iter()
            .map(|config| ParticleGroup::from_config(config, &mut self.rng))
            .collect();
        self.snapshot = self
            .groups
            .iter()
            .map(|group| Vec::with_capacity(group.len()))
            .collect();
        self.matrix = Some(matrix);
        // Warm-up pass: velocities are live before the first frame.
        self.step();
    }

    /// Advance the simulation by exactly one tick.
    ///
    /// Returns the read-only view of all groups for rendering. No particle
    /// is added or removed; for a fixed seed the update is deterministic.
    pub fn advance(&mut self) -> Result<&[ParticleGroup], SimulationError> {
        if self.groups.is_empty() || self.matrix.is_none() {
            return Err(SimulationError::NotConfigured);
        }
        self.step();
        Ok(&self.groups)
    }

    /// Snap every group back to its seed layout, keeping the rule matrix.
    ///
    /// Velocities restart at zero because placement rebuilds the particles.
    pub fn reset(&mut self) {
        for group in &mut self.groups {
            group.reset_position(&mut self.rng);
        }
    }

    /// Release groups and rules.
    ///
    /// Until the next setup, [`advance`](Self::advance) fails with
    /// [`SimulationError::NotConfigured`].
    pub fn clear(&mut self) {
        self.groups.clear();
        self.matrix = None;
        self.snapshot.clear();
    }

    /// Read-only view of all groups.
    pub fn groups(&self) -> &[ParticleGroup] {
        &self.groups
    }

    /// The installed rule matrix, if the engine is configured.
    pub fn rules(&self) -> Option<&RuleMatrix> {
        self.matrix.as_ref()
    }

    /// The engine's physics parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Whether groups and rules are installed.
    pub fn is_configured(&self) -> bool {
        !self.groups.is_empty() && self.matrix.is_some()
    }

    /// Toggle the per-group fork-join between ticks.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    fn step(&mut self) {
        self.fill_snapshot();
        // One seed per tick, drawn before the fan-out, so jitter streams
        // are identical whether groups run on the pool or serially.
        let tick_seed: u64 = self.rng.gen();
        let parallel = self.parallel;
        let params = self.params;
        let matrix = match &self.matrix {
            Some(matrix) => matrix,
            None => return,
        };
        let snapshot = &self.snapshot;
        let groups = &mut self.groups;

        if parallel {
            groups.par_iter_mut().enumerate().for_each(|(index, group)| {
                step_group(index, group, snapshot, matrix, &params, tick_seed);
            });
        } else {
            for (index, group) in groups.iter_mut().enumerate() {
                step_group(index, group, snapshot, matrix, &params, tick_seed);
            }
        }
    }

    fn fill_snapshot(&mut self) {
        for (buffer, group) in self.snapshot.iter_mut().zip(&self.groups) {
            buffer.clear();
            buffer.extend(group.particles.iter().map(|p| p.position));
        }
    }
}

/// Force-and-integrate pass for one group.
///
/// Reads positions only from the snapshot and writes only `group`, which is
/// what keeps the fan-out data-race-free and the result independent of
/// scheduling.
fn step_group(
    index: usize,
    group: &mut ParticleGroup,
    snapshot: &[Vec<Vec2>],
    matrix: &RuleMatrix,
    params: &Params,
    tick_seed: u64,
) {
    let mut rng = SmallRng::seed_from_u64(tick_seed ^ (index as u64).wrapping_mul(GROUP_STREAM));

    for (i, particle) in group.particles.iter_mut().enumerate() {
        let pos = snapshot[index][i];
        let mut force = Vec2::ZERO;

        for (other_index, others) in snapshot.iter().enumerate() {
            let coeff = matrix.get(index, other_index);
            for (j, other) in others.iter().enumerate() {
                if other_index == index && j == i {
                    continue;
                }

                let dx = axis_delta(pos.x, other.x, params.wrapped);
                let dy = axis_delta(pos.y, other.y, params.wrapped);

                if dx == 0.0 && dy == 0.0 {
                    // Exact coincidence: jitter apart instead of dividing
                    // by zero distance.
                    force.x += (rng.gen::<f32>() * 2.0 - 1.0) * params.repulsion;
                    force.y += (rng.gen::<f32>() * 2.0 - 1.0) * params.repulsion;
                } else {
                    let dist_sq = dx * dx + dy * dy;
                    if dist_sq < params.max_effect_distance_sq {
                        let f = coeff / dist_sq.sqrt();
                        force.x += f * dx;
                        force.y += f * dy;
                    }
                }
            }
        }

        let (px, vx) = step_axis(particle.position.x, particle.velocity.x, force.x, params);
        let (py, vy) = step_axis(particle.position.y, particle.velocity.y, force.y, params);
        particle.position = Vec2::new(px, py);
        particle.velocity = Vec2::new(vx, vy);
    }
}

/// Per-axis delta from `other` toward `this`, taking the wrap-around
/// alternative when it is shorter in magnitude.
fn axis_delta(this: f32, other: f32, wrapped: bool) -> f32 {
    let direct = this - other;
    if wrapped {
        let around = this + (1.0 - other);
        if around.abs() < direct.abs() {
            return around;
        }
    }
    direct
}

/// Advance one axis: fold the accumulated force into the velocity, clamp to
/// the terminal velocity, integrate, then apply the boundary policy.
fn step_axis(pos: f32, vel: f32, force: f32, params: &Params) -> (f32, f32) {
    let mut vel = (vel + force) * params.momentum;
    if vel.abs() > params.terminal_velocity {
        vel = params.terminal_velocity.copysign(vel);
    }
    if vel == 0.0 {
        // A still axis stays bit-identical instead of churning float state.
        return (pos, vel);
    }

    let mut next = pos + vel;
    if params.wrapped {
        if next < 0.0 {
            next += 1.0;
            if next >= 1.0 {
                // A tiny overshoot can round back onto the bound.
                next = 0.0;
            }
        } else if next >= 1.0 {
            next -= 1.0;
        }
    } else if next <= 0.0 {
        vel = -vel;
        next = 0.0;
    } else if next >= 1.0 {
        vel = -vel;
        next = UPPER_BOUND;
    }
    (next, vel)
}

fn validate_configs(configs: &[GroupConfig]) -> Result<(), ConfigError> {
    if configs.is_empty() {
        return Err(ConfigError::NoGroups);
    }
    for config in configs {
        if config.count == 0 {
            return Err(ConfigError::EmptyGroup(config.name.clone()));
        }
    }
    Ok(())
}
