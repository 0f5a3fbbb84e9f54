//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings shared by every step:
//! - base step size `h0` (the driver may scale it per call),
//! - gravitational constant `g`,
//! - softening length for the force law.

/// One day in seconds, the reference base step for solar-system scenarios
pub const DAY: f64 = 3600.0 * 24.0;

/// Reference gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.674_30e-11;

/// Reference softening length (m)
pub const SOFTENING: f64 = 1.0e9;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64,        // base step size, seconds
    pub g: f64,         // gravitational constant
    pub softening: f64, // softening length, meters
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            h0: DAY,
            g: G,
            softening: SOFTENING,
        }
    }
}
