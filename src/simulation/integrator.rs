//! Fixed-step time integrator for the N-body system
//!
//! Provides the semi-implicit (symplectic) Euler scheme driven by a
//! `ForceSet`: one force evaluation per step against a frozen position
//! snapshot, then velocity before position for every body.

use super::forces::ForceSet;
use super::states::{NVec2, System};

/// Advance the system by one step of `dt` using semi-implicit Euler
///
/// Phase 1 accumulates the total force on every body from the positions as
/// they stand at the start of the step. Nothing is mutated until the whole
/// buffer is filled, so the totals cannot depend on iteration order.
///
/// Phase 2, per body:
///
/// ```text
/// a_n+1 = F_n / m
/// v_n+1 = v_n + a_n+1 * dt
/// x_n+1 = x_n + v_n+1 * dt
/// ```
///
/// The position moves with the *already-updated* velocity. That ordering is
/// what makes the scheme symplectic and gives it its long-term energy
/// behavior; swapping the two lines turns it into explicit Euler, which
/// drifts. `dt` may vary per call; `sys.t` advances by `dt`.
pub fn symplectic_euler(sys: &mut System, forces: &ForceSet, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // f[i] will hold the total force on body i at the current positions
    let mut f = vec![NVec2::zeros(); n];

    // Accumulate against the pre-update snapshot: the buffer is the only
    // thing written during this phase
    forces.accumulate_forces(sys.t, &*sys, &mut f);

    // Kick then drift, velocity first, position from the new velocity
    for (b, fi) in sys.bodies.iter_mut().zip(f.iter()) {
        b.set_acceleration(*fi);
        b.integrate_velocity(dt);
        b.integrate_position(dt);
    }

    // Advance the system time by one full step
    sys.t += dt;
}
