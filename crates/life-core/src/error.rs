//! Engine error types.

use thiserror::Error;

/// Engine error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Grid dimensions must both be positive.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A `max_age` of zero would leave the derived alpha ill-defined.
    #[error("invalid max age: 0")]
    InvalidMaxAge,
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
