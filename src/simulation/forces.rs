//! Force contributors for the n-body engine
//!
//! Defines the force-term trait and the softened Newtonian gravity term.
//! Terms accumulate into an index-aligned force buffer, one slot per body in
//! collection order, so per-step totals never depend on body names.

use crate::simulation::states::{Body, NVec2, System};

/// Collection of force terms (gravity today, drag or thrust later)
/// Each term implements [`Force`] and their contributions are summed
/// into a single total force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - `out` is index-aligned with `sys.bodies`
    pub fn accumulate_forces(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.force(t, sys, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Softened Newtonian gravity between two point masses
///
/// Returns the force exerted on `a` by `b`:
///
/// ```text
/// r_vec = x_b - x_a
/// F     = G * m_a * m_b / (|r_vec|^2 + softening^2) * r_hat
/// ```
///
/// Two bodies at the exact same position exert no force on each other; that
/// is an explicit policy for the degenerate case, not an error. The softening
/// term caps the magnitude as the separation shrinks, trading short-range
/// accuracy for numerical stability. The unit vector `r_hat` uses the
/// unsoftened separation.
pub fn gravitational_force(a: &Body, b: &Body, g: f64, softening: f64) -> NVec2 {
    // r_vec is the displacement from a to b; the pull on a points along +r_vec
    let r_vec = b.position() - a.position();
    let r_mag = r_vec.norm();
    if r_mag == 0.0 {
        // Coincident bodies: zero force by policy
        return NVec2::zeros();
    }
    let r_hat = r_vec / r_mag;

    // Softened inverse-square magnitude:
    // F = G m_a m_b / (r^2 + softening^2)
    let force_mag = g * a.mass() * b.mass() / (r_mag * r_mag + softening * softening);
    force_mag * r_hat
}

/// Direct-sum Newtonian gravity with softening
///
/// Evaluates every ordered pair (i, j), i != j, independently. The force law
/// is antisymmetric, so an implementation could walk unordered pairs and flip
/// the sign for a 2x saving; the ordered double loop is kept as the baseline
/// because it matches the documented per-body totals exactly.
pub struct NewtonianGravity {
    pub g: f64,         // gravitational constant
    pub softening: f64, // softening length, same units as position
}

impl Force for NewtonianGravity {
    fn force(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each ordered pair (i, j) with i != j
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in 0..n {
                if i == j {
                    continue;
                }
                let bj = &sys.bodies[j];
                // Total force on body i: sum of the pulls from every other body
                out[i] += gravitational_force(bi, bj, self.g, self.softening);
            }
        }
    }
}
