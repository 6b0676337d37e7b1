use thiserror::Error;

/// Error types for the loglet-rs library.
#[derive(Error, Debug)]
pub enum LogletError {
    /// A curve model was evaluated with zero steepness.
    #[error("Domain error: {0}")]
    DomainError(String),

    /// A search interval whose lower end exceeds its upper end.
    #[error("Invalid bounds: min ({min}) must not exceed max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    /// A search interval containing NaN or an infinite end.
    #[error("Bounds must be finite, got [{min}, {max}]")]
    NonFiniteBounds { min: f64, max: f64 },

    /// Three or more curves were requested without explicit midpoint bounds.
    #[error(
        "Midpoint bounds cannot be estimated for {n_curves} curves; supply explicit constraints"
    )]
    MissingMidpointBounds { n_curves: usize },

    /// Mismatch between the lengths of related sequences.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Annealing configuration out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A result was requested from a fit that has not been regressed yet.
    #[error("No regression has been run on this fit")]
    NotFitted,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for loglet-rs operations.
pub type Result<T> = std::result::Result<T, LogletError>;
