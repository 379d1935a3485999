//! Student-t interval estimation (coefficient intervals, prediction bands).

mod coefficient;
mod estimator;
mod prediction;
mod quantile;

pub use coefficient::CoefficientInterval;
pub(crate) use coefficient::check_sxx;
pub use estimator::{IntervalEstimator, IntervalEstimatorBuilder, IntervalSummary};
pub use prediction::{compute_band, compute_prediction_band};
pub use quantile::{t_quantile, validate_level};
