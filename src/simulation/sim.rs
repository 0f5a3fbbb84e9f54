//! The simulation owner: body collection, parameters, and the step loop
//!
//! Builds a fully-initialized [`Simulation`] either from explicit bodies or
//! from a [`ScenarioConfig`] loaded from YAML, validates the construction
//! invariants up front, and exposes read-only state views for an external
//! rendering/driver layer.

use std::collections::HashSet;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// A fully-initialized N-body simulation
///
/// Owns the ordered, fixed body collection, the physical constants, and the
/// active force terms. The only mutation entry point is [`Simulation::step`];
/// everything else is a read view. Pacing, play/pause, and speed multipliers
/// live in whatever drives the step calls, not here.
pub struct Simulation {
    system: System,
    parameters: Parameters,
    forces: ForceSet,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("system", &self.system)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Build a simulation from an ordered body list and parameters
    ///
    /// Fails fast on the configurations that would otherwise blow up mid-run:
    /// an empty body list, duplicate body names (force totals are
    /// index-aligned, but identity must still be unambiguous for display and
    /// debugging), a non-positive base step, or non-finite constants.
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Result<Self> {
        if bodies.is_empty() {
            return Err(Error::EmptyScenario);
        }
        let mut seen = HashSet::new();
        for b in &bodies {
            if !seen.insert(b.name().to_string()) {
                return Err(Error::DuplicateName(b.name().to_string()));
            }
        }
        if !parameters.h0.is_finite() || parameters.h0 <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "base step h0 must be finite and > 0, got {}",
                parameters.h0
            )));
        }
        if !parameters.g.is_finite() {
            return Err(Error::InvalidConfig("G must be finite".into()));
        }
        if !parameters.softening.is_finite() || parameters.softening < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "softening must be finite and >= 0, got {}",
                parameters.softening
            )));
        }

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            t: 0.0,
        };

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity {
            g: parameters.g,
            softening: parameters.softening,
        });

        Ok(Self {
            system,
            parameters,
            forces,
        })
    }

    /// Build a simulation from a YAML-facing scenario configuration
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                let x = vec2_from_config(&bc.name, "x", &bc.x)?;
                let v = vec2_from_config(&bc.name, "v", &bc.v)?;
                Body::new(bc.name.clone(), bc.m, x, v)
            })
            .collect::<Result<Vec<Body>>>()?;

        let parameters = Parameters {
            h0: cfg.parameters.h0,
            g: cfg.parameters.g,
            softening: cfg.parameters.softening,
        };

        Self::new(bodies, parameters)
    }

    /// Advance the whole system by one step of `dt` seconds
    ///
    /// `dt` is chosen by the caller per invocation (typically the base step
    /// times a speed multiplier) and must be positive and finite. Identical
    /// initial state and an identical dt sequence reproduce identical state
    /// and trajectories. Too large a `dt` relative to the fastest orbit makes
    /// the integrator diverge; the core performs no step-size control.
    pub fn step(&mut self, dt: f64) {
        debug_assert!(dt.is_finite() && dt > 0.0, "step called with dt = {dt}");
        symplectic_euler(&mut self.system, &self.forces, dt);
    }

    /// Read-only ordered view of the bodies, for markers and trails
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Simulated time elapsed since construction, seconds
    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

// Config vectors arrive as YAML sequences; anything but two finite
// components is a configuration error, reported with the body and field name
fn vec2_from_config(body: &str, field: &str, v: &[f64]) -> Result<NVec2> {
    if v.len() != 2 {
        return Err(Error::InvalidConfig(format!(
            "body `{body}`: {field} must have exactly 2 components, got {}",
            v.len()
        )));
    }
    Ok(NVec2::new(v[0], v[1]))
}
