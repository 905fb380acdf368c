//! Error types for the onboarding core.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),
}

/// Errors raised while validating the static onboarding configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Step catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate step name in catalog: {0}")]
    DuplicateStep(String),

    #[error("Step {name} has position {position}, expected {expected}")]
    NonContiguousPosition {
        name: String,
        position: usize,
        expected: usize,
    },

    #[error("Band boundaries must be strictly increasing: {prev} then {next}")]
    UnorderedBands { prev: f64, next: f64 },

    #[error("Band table is empty")]
    EmptyBands,
}

/// Errors raised by the step sequencer.
///
/// An unknown step name is a programmer error in the hosting layer; it is
/// surfaced immediately rather than defaulting to the first step.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("Unknown step: {0}")]
    UnknownStep(String),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
