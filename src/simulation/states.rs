//! Core state types for the N-body simulation
//!
//! Defines the body/system structs used by the engine:
//! - `Body`       one celestial point mass, with its recorded trajectory
//! - `Trajectory` append-only position history of a single body
//! - `System`     the ordered body collection and the current time `t`
//!
//! All vectors are 2D world coordinates in meters, `NVec2`.

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub type NVec2 = Vector2<f64>;

/// Append-only history of a body's positions, one snapshot per completed step
/// (plus the initial position). Kept as its own type so a bounded variant
/// (ring buffer, decimation) can later replace unbounded growth behind the
/// same read interface.
#[derive(Debug, Clone)]
pub struct Trajectory {
    snapshots: Vec<NVec2>,
}

impl Trajectory {
    /// Start a trajectory at the body's initial position
    pub fn starting_at(x: NVec2) -> Self {
        Self {
            snapshots: vec![x],
        }
    }

    /// Append one position snapshot
    pub(crate) fn record(&mut self, x: NVec2) {
        self.snapshots.push(x);
    }

    /// Full ordered sequence recorded so far
    pub fn history(&self) -> &[NVec2] {
        &self.snapshots
    }

    /// Number of snapshots (initial position + one per step)
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// One celestial point mass
///
/// Fields are private: the renderer and other external readers get read
/// access only, and state advances exclusively through the three
/// crate-internal integration operations below. That keeps every velocity
/// and position update on one auditable path.
#[derive(Debug, Clone)]
pub struct Body {
    name: String, // stable identity, unique within a System
    m: f64,       // mass, always > 0
    x: NVec2,     // position
    v: NVec2,     // velocity
    a: NVec2,     // acceleration, recomputed from scratch every step
    path: Trajectory,
}

impl Body {
    /// Create a body from its initial state
    ///
    /// Errors with [`Error::InvalidBody`] if the mass is not finite and
    /// positive (it divides the accumulated force later) or if any position
    /// or velocity component is NaN/inf.
    pub fn new(name: impl Into<String>, m: f64, x: NVec2, v: NVec2) -> Result<Self> {
        let name = name.into();
        if !m.is_finite() || m <= 0.0 {
            return Err(Error::InvalidBody {
                name,
                reason: format!("mass must be finite and > 0, got {m}"),
            });
        }
        if !(x.x.is_finite() && x.y.is_finite()) {
            return Err(Error::InvalidBody {
                name,
                reason: "position must be finite".into(),
            });
        }
        if !(v.x.is_finite() && v.y.is_finite()) {
            return Err(Error::InvalidBody {
                name,
                reason: "velocity must be finite".into(),
            });
        }
        Ok(Self {
            name,
            m,
            x,
            v,
            a: NVec2::zeros(),
            path: Trajectory::starting_at(x),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn acceleration(&self) -> NVec2 {
        self.a
    }

    /// Recorded trajectory (initial position plus one entry per step)
    pub fn path(&self) -> &Trajectory {
        &self.path
    }

    /// a = F / m, overwriting whatever the previous step left behind.
    /// Mass > 0 is a construction invariant, so the division is safe.
    pub(crate) fn set_acceleration(&mut self, force: NVec2) {
        self.a = force / self.m;
    }

    /// v_n+1 = v_n + a_n+1 * dt
    pub(crate) fn integrate_velocity(&mut self, dt: f64) {
        self.v += self.a * dt;
    }

    /// x_n+1 = x_n + v_n+1 * dt, then record the new position.
    /// Always called after `integrate_velocity`, so the position moves with
    /// the already-updated velocity (semi-implicit Euler ordering).
    pub(crate) fn integrate_position(&mut self, dt: f64) {
        self.x += self.v * dt;
        self.path.record(self.x);
    }
}

/// The ordered body collection and the current simulation time `t`.
/// The set of bodies is fixed after construction.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,
    pub t: f64, // time in seconds
}
