pub mod simulation;
pub mod configuration;
pub mod driver;
pub mod error;

pub use simulation::states::{Body, NVec2, System, Trajectory};
pub use simulation::forces::{gravitational_force, Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::params::{Parameters, DAY, G, SOFTENING};
pub use simulation::sim::Simulation;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use driver::Driver;
pub use error::{Error, Result};
