//! Core types for interval estimation.

mod error;
mod interval;
mod line;
mod options;
mod prediction;
mod sample;
mod scale;

pub use error::IntervalError;
pub use interval::ConfidenceInterval;
pub use line::FittedLine;
pub use options::{
    IntervalOptions, IntervalOptionsBuilder, MarginRule, OptionsError, QuantileRule,
    ScaleEstimator,
};
pub use prediction::{IntervalType, PredictionBand};
pub use sample::{Sample, MIN_OBSERVATIONS};
pub use scale::ResidualScale;
