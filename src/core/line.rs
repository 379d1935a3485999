//! Fitted straight line.

use faer::Col;

/// Intercept and slope of a fitted line `y = intercept + slope·x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedLine {
    pub intercept: f64,
    pub slope: f64,
}

impl FittedLine {
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// ŷ(x) = α + β·x.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Fitted values over a grid.
    pub fn predict_all(&self, x: &Col<f64>) -> Col<f64> {
        Col::from_fn(x.nrows(), |i| self.predict(x[i]))
    }

    /// Residuals yᵢ - ŷ(xᵢ).
    pub fn residuals(&self, x: &Col<f64>, y: &Col<f64>) -> Col<f64> {
        Col::from_fn(x.nrows(), |i| y[i] - self.predict(x[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict() {
        let line = FittedLine::new(1.0, 2.0);
        assert!((line.predict(0.5) - 2.0).abs() < 1e-12);

        let grid = Col::from_fn(3, |i| i as f64);
        let fit = line.predict_all(&grid);
        assert!((fit[2] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_residuals() {
        let line = FittedLine::new(0.0, 1.0);
        let x = Col::from_fn(3, |i| i as f64);
        let y = Col::from_fn(3, |i| i as f64 + 0.5);

        for r in line.residuals(&x, &y).iter() {
            assert!((r - 0.5).abs() < 1e-12);
        }
    }
}
