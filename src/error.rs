use thiserror::Error;

/// Crate-wide result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core
///
/// Everything here is a construction-time or parameter error: once a
/// `Simulation` is built, `step` is unconditional arithmetic and cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// A body's initial state is unusable (non-positive mass, NaN components)
    #[error("invalid body `{name}`: {reason}")]
    InvalidBody { name: String, reason: String },

    /// Two bodies share the same identity, which must be unique
    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    /// A simulation needs at least one body
    #[error("scenario contains no bodies")]
    EmptyScenario,

    /// A scenario configuration value is malformed or out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid runtime parameter (e.g. a non-positive speed multiplier)
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
