//! Student-t interval estimation for simple linear regression.
//!
//! Given a fitted intercept and slope and an estimate of the residual scale,
//! this crate computes confidence intervals for both coefficients and pointwise
//! prediction bands over an x grid. Degenerate inputs (fewer than three
//! observations, constant x, confidence levels outside (0, 1)) are reported as
//! [`IntervalError`] values instead of propagating NaN or infinity.
//!
//! The crate also carries the small computations that surround a
//! frequentist-versus-Bayesian comparison: simulating linear data, a closed-form
//! least-squares line, HPD intervals over posterior draws, and the beta-binomial
//! conjugate posterior.
//!
//! # Example
//!
//! ```rust,ignore
//! use regress_intervals::prelude::*;
//!
//! let sample = Sample::from_slices(&x, &y)?;
//! let line = LeastSquaresLine.fit(&sample)?;
//!
//! let summary = IntervalEstimator::builder()
//!     .confidence_level(0.95)
//!     .build()
//!     .estimate(&sample, &line)?;
//!
//! println!("intercept: {:?}", summary.intercept);
//! println!("slope: {:?}", summary.slope);
//! ```

pub mod core;
pub mod inference;
pub mod posterior;
pub mod simulation;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        ConfidenceInterval, FittedLine, IntervalError, IntervalOptions, IntervalOptionsBuilder,
        IntervalType, MarginRule, OptionsError, PredictionBand, QuantileRule, ResidualScale,
        Sample, ScaleEstimator,
    };
    pub use crate::inference::{
        compute_prediction_band, t_quantile, CoefficientInterval, IntervalEstimator,
        IntervalSummary,
    };
    pub use crate::posterior::{hpd_interval, BetaBinomial, BetaPosterior, PosteriorSummary};
    pub use crate::simulation::LinearSimulation;
    pub use crate::solvers::{LeastSquaresLine, LineFitter};
}

pub use crate::core::{
    ConfidenceInterval, FittedLine, IntervalError, IntervalOptions, IntervalType, PredictionBand,
    ResidualScale, Sample,
};
pub use crate::inference::{CoefficientInterval, IntervalEstimator, IntervalSummary};
pub use crate::solvers::{LeastSquaresLine, LineFitter};
