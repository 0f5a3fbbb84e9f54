//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   h0: 86400.0             # base step size, seconds (one day)
//!   g: 6.67430e-11          # gravitational constant
//!   softening: 1.0e9        # softening length, meters
//!
//! bodies:
//!   - name: "Sun"
//!     m: 1.989e30
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     color: "yellow"
//!   - name: "Earth"
//!     m: 5.972e24
//!     x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 29780.0 ]
//!     color: "blue"
//! ```
//!
//! The engine maps this configuration into its runtime representation and
//! validates it during `Simulation::from_config`; the config layer itself
//! stays a plain data mirror of the file.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64,        // base step size, seconds
    pub g: f64,         // gravitational constant
    pub softening: f64, // softening length - prevents singular forces at very small separations
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,  // stable identity, unique within the scenario
    pub m: f64,        // mass in kg
    pub x: Vec<f64>,   // initial position [x, y] in meters
    pub v: Vec<f64>,   // initial velocity [vx, vy] in meters/second
    #[serde(default)]
    pub color: Option<String>, // display hint for an external renderer; the core ignores it
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // list of bodies that define the initial state of the system
}
