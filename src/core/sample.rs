//! Paired (x, y) observations.

use super::error::IntervalError;
use crate::utils::{centered_squares, mean, sort_by_key};
use faer::Col;

/// Minimum number of observations for a two-parameter line with positive
/// residual degrees of freedom.
pub const MIN_OBSERVATIONS: usize = 3;

/// Ordered sequence of (x, y) pairs.
///
/// Construction guarantees equal lengths, finite values and `n >= 3`, so
/// `degrees_of_freedom()` is always positive.
#[derive(Debug, Clone)]
pub struct Sample {
    x: Col<f64>,
    y: Col<f64>,
}

impl Sample {
    /// Create a sample from predictor and response columns.
    pub fn new(x: Col<f64>, y: Col<f64>) -> Result<Self, IntervalError> {
        if x.nrows() != y.nrows() {
            return Err(IntervalError::DimensionMismatch {
                expected: x.nrows(),
                got: y.nrows(),
            });
        }
        if x.nrows() < MIN_OBSERVATIONS {
            return Err(IntervalError::DegenerateSample {
                observations: x.nrows(),
            });
        }
        for i in 0..x.nrows() {
            if !x[i].is_finite() || !y[i].is_finite() {
                return Err(IntervalError::NonFiniteValue { index: i });
            }
        }

        Ok(Self { x, y })
    }

    /// Create a sample from slices.
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Self, IntervalError> {
        Self::new(
            Col::from_fn(x.len(), |i| x[i]),
            Col::from_fn(y.len(), |i| y[i]),
        )
    }

    pub fn x(&self) -> &Col<f64> {
        &self.x
    }

    pub fn y(&self) -> &Col<f64> {
        &self.y
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    /// Returns true if the sample has no observations.
    pub fn is_empty(&self) -> bool {
        self.x.nrows() == 0
    }

    /// Residual degrees of freedom `n - 2`.
    pub fn degrees_of_freedom(&self) -> usize {
        self.len() - 2
    }

    pub fn x_mean(&self) -> f64 {
        mean(&self.x)
    }

    pub fn y_mean(&self) -> f64 {
        mean(&self.y)
    }

    /// x* = (xᵢ - x̄)², aligned with `x()`.
    pub fn centered_squares(&self) -> Col<f64> {
        centered_squares(&self.x, self.x_mean())
    }

    /// Centered sum of squares Sxx = Σ(xᵢ - x̄)².
    pub fn sxx(&self) -> f64 {
        self.centered_squares().iter().sum()
    }

    /// Copy of the sample with pairs reordered by ascending x.
    pub fn sorted_by_x(&self) -> Sample {
        let (x, y) = sort_by_key(&self.x, &self.y);
        Sample { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatch() {
        let result = Sample::from_slices(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(IntervalError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_new_rejects_two_points() {
        let result = Sample::from_slices(&[1.0, 2.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(IntervalError::DegenerateSample { observations: 2 })
        ));
    }

    #[test]
    fn test_new_rejects_nan() {
        let result = Sample::from_slices(&[1.0, 2.0, 3.0], &[1.0, f64::NAN, 3.0]);
        assert!(matches!(
            result,
            Err(IntervalError::NonFiniteValue { index: 1 })
        ));
    }

    #[test]
    fn test_summary_values() {
        let sample = Sample::from_slices(&[0.0, 0.25, 0.5, 0.75, 1.0], &[1.0, 1.5, 2.0, 2.5, 3.0])
            .unwrap();

        assert_eq!(sample.len(), 5);
        assert_eq!(sample.degrees_of_freedom(), 3);
        assert!((sample.x_mean() - 0.5).abs() < 1e-12);
        assert!((sample.y_mean() - 2.0).abs() < 1e-12);
        assert!((sample.sxx() - 0.625).abs() < 1e-12);
    }

    #[test]
    fn test_sorted_by_x_keeps_pairs() {
        let sample = Sample::from_slices(&[0.9, 0.1, 0.5], &[9.0, 1.0, 5.0]).unwrap();
        let sorted = sample.sorted_by_x();

        for i in 0..3 {
            assert!((sorted.y()[i] - 10.0 * sorted.x()[i]).abs() < 1e-12);
        }
        assert!(sorted.x()[0] < sorted.x()[1] && sorted.x()[1] < sorted.x()[2]);
    }
}
