//! Error types for interval estimation.

use super::options::OptionsError;
use thiserror::Error;

/// Errors that can occur while estimating intervals.
#[derive(Debug, Error)]
pub enum IntervalError {
    /// Fewer than three observations, so `n - 2` degrees of freedom are not positive.
    #[error("degenerate sample: need at least 3 observations for n - 2 > 0 degrees of freedom, got {observations}")]
    DegenerateSample { observations: usize },

    /// All x-values are identical (Sxx = 0).
    #[error("singular design: all x-values are identical (Sxx = 0)")]
    SingularDesign,

    #[error("confidence level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),

    #[error("critical value must be finite and non-negative, got {0}")]
    InvalidQuantile(f64),

    #[error("residual scale must be finite and non-negative, got {0}")]
    InvalidScale(f64),

    #[error("dimension mismatch: expected {expected} elements, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    #[error("no posterior samples supplied")]
    EmptySamples,

    #[error("invalid observation: {successes} successes out of {trials} trials")]
    InvalidObservation { trials: u64, successes: u64 },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("distribution error: {0}")]
    Distribution(String),
}
