//! Residual scale σ̂.

use super::error::IntervalError;
use super::line::FittedLine;
use super::options::ScaleEstimator;
use super::sample::Sample;
use crate::utils::population_std;

/// Estimated standard deviation of the residuals. Finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualScale(f64);

impl ResidualScale {
    /// Wrap an externally estimated σ̂.
    pub fn new(sigma_hat: f64) -> Result<Self, IntervalError> {
        if !sigma_hat.is_finite() || sigma_hat < 0.0 {
            return Err(IntervalError::InvalidScale(sigma_hat));
        }
        Ok(Self(sigma_hat))
    }

    /// Estimate σ̂ for `line` on `sample` with the given estimator.
    pub fn estimate(sample: &Sample, line: &FittedLine, estimator: ScaleEstimator) -> Self {
        match estimator {
            ScaleEstimator::FittedSpread => Self::fitted_spread(sample, line),
            ScaleEstimator::ResidualStandardError => Self::residual_standard_error(sample, line),
        }
    }

    /// Population standard deviation of ŷ over the sorted x grid.
    pub fn fitted_spread(sample: &Sample, line: &FittedLine) -> Self {
        let sorted = sample.sorted_by_x();
        let fitted = line.predict_all(sorted.x());
        Self(population_std(&fitted))
    }

    /// √(RSS / (n - 2)).
    pub fn residual_standard_error(sample: &Sample, line: &FittedLine) -> Self {
        let residuals = line.residuals(sample.x(), sample.y());
        let rss: f64 = residuals.iter().map(|r| r * r).sum();
        Self((rss / sample.degrees_of_freedom() as f64).sqrt())
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noiseless() -> Sample {
        Sample::from_slices(&[0.0, 0.25, 0.5, 0.75, 1.0], &[1.0, 1.5, 2.0, 2.5, 3.0]).unwrap()
    }

    #[test]
    fn test_new_rejects_negative_and_nan() {
        assert!(matches!(
            ResidualScale::new(-0.1),
            Err(IntervalError::InvalidScale(_))
        ));
        assert!(matches!(
            ResidualScale::new(f64::NAN),
            Err(IntervalError::InvalidScale(_))
        ));
        assert!(ResidualScale::new(0.0).is_ok());
    }

    #[test]
    fn test_fitted_spread_is_slope_times_sd_x() {
        let line = FittedLine::new(1.0, 2.0);
        let scale = ResidualScale::fitted_spread(&noiseless(), &line);
        assert!((scale.value() - 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_residual_standard_error_noiseless() {
        let line = FittedLine::new(1.0, 2.0);
        let scale = ResidualScale::residual_standard_error(&noiseless(), &line);
        assert!(scale.value().abs() < 1e-12);
    }

    #[test]
    fn test_residual_standard_error_known() {
        // residuals [+1, -1, +1, -1, +1] around y = 0: RSS = 5, df = 3
        let sample = Sample::from_slices(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, -1.0, 1.0, -1.0, 1.0])
            .unwrap();
        let line = FittedLine::new(0.0, 0.0);
        let scale = ResidualScale::estimate(&sample, &line, ScaleEstimator::ResidualStandardError);
        assert!((scale.value() - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }
}
