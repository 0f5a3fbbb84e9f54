//! Run-control wrapper around a [`Simulation`]
//!
//! Holds the state an animation loop needs but the core must not own: a
//! running flag and a speed multiplier. The loop calls [`Driver::tick`] once
//! per frame; a paused driver simply declines to step. Multiple independent
//! drivers over independent simulations are fine, nothing here is shared.

use crate::error::{Error, Result};
use crate::simulation::sim::Simulation;

pub struct Driver {
    sim: Simulation,
    running: bool,
    speed: f64, // multiplier applied to the base step h0
}

impl Driver {
    /// Wrap a simulation, initially running at 1x speed
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            running: true,
            speed: 1.0,
        }
    }

    /// Advance by one frame's worth of simulated time, `h0 * speed`
    ///
    /// Returns `true` if the simulation stepped, `false` if paused.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let dt = self.sim.parameters().h0 * self.speed;
        self.sim.step(dt);
        true
    }

    /// Flip between running and paused
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Set the speed multiplier; rejects non-positive or non-finite values
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "speed multiplier must be finite and > 0, got {speed}"
            )));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Read access to the wrapped simulation
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}
