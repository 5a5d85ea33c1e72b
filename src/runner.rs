//! Headless frame driver.
//!
//! The engine itself knows nothing about pausing: pause and single-step
//! state belongs to whatever drives the simulation. [`Runner`] is that
//! driver boundary with every presentation concern stripped away. A render
//! loop calls [`frame`](Runner::frame) once per displayed frame and draws
//! whatever it returns; input handling flips the pause and forward flags.

use crate::error::SimulationError;
use crate::group::ParticleGroup;
use crate::simulation::SimulationEngine;

/// Drives an engine one frame at a time, gating on pause and step flags.
pub struct Runner {
    engine: SimulationEngine,
    paused: bool,
    forwarded: bool,
}

impl Runner {
    /// Wrap a configured engine. Starts unpaused.
    pub fn new(engine: SimulationEngine) -> Self {
        Self {
            engine,
            paused: false,
            forwarded: false,
        }
    }

    /// Advance one frame unless paused.
    ///
    /// Returns `Ok(None)` when the simulation is paused and not being
    /// stepped; the caller keeps drawing the last state. The forward flag
    /// overrides pause, which is what makes frame-by-frame stepping work.
    pub fn frame(&mut self) -> Result<Option<&[ParticleGroup]>, SimulationError> {
        if !self.paused || self.forwarded {
            self.engine.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Flip the pause flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Whether the runner is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Hold-to-step: while set, frames advance even when paused.
    pub fn set_forward(&mut self, forwarded: bool) {
        self.forwarded = forwarded;
    }

    /// Snap particles back to their seed layout and resume.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.paused = false;
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// Mutable access to the wrapped engine, for clearing or re-setup.
    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }
}
