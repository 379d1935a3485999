//! Fitting a straight line to a sample.

use crate::core::{FittedLine, IntervalError, Sample};
use crate::inference::check_sxx;
use crate::utils::center_vector;

/// Produces intercept and slope estimates for a sample.
///
/// Interval estimation consumes any `FittedLine`; this trait is the seam for
/// plugging in the estimate the intervals should be centered on.
pub trait LineFitter {
    /// Fit a line to the sample.
    fn fit(&self, sample: &Sample) -> Result<FittedLine, IntervalError>;
}

/// Closed-form least-squares line: slope = Sxy/Sxx, intercept = ȳ - slope·x̄.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquaresLine;

impl LineFitter for LeastSquaresLine {
    fn fit(&self, sample: &Sample) -> Result<FittedLine, IntervalError> {
        let (x_centered, x_mean) = center_vector(sample.x());
        let (y_centered, y_mean) = center_vector(sample.y());

        let sxx: f64 = x_centered.iter().map(|d| d * d).sum();
        check_sxx(sxx)?;

        let sxy: f64 = x_centered
            .iter()
            .zip(y_centered.iter())
            .map(|(dx, dy)| dx * dy)
            .sum();

        let slope = sxy / sxx;
        Ok(FittedLine::new(y_mean - slope * x_mean, slope))
    }
}
