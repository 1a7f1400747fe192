//! RUL error types
//!
//! Numerically degenerate data (empty series, zero variance, zero degradation)
//! never produces an error; those cases resolve to defined sentinel results.
//! Errors are reserved for caller contract violations and singular systems.

use thiserror::Error;

/// Result type alias for RUL operations
pub type Result<T> = std::result::Result<T, RulError>;

/// Errors that can occur during RUL computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RulError {
    /// Normal-equations matrix is singular even after partial pivoting
    #[error("Numerical singularity: {size}x{size} normal-equations matrix is singular")]
    NumericalSingularity { size: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Explicit x sequence does not pair up with the y sequence
    #[error("Dimension mismatch: x has {x_len} values, y has {y_len}")]
    DimensionMismatch { x_len: usize, y_len: usize },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RulError {
    /// Shorthand for [`RulError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        RulError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
