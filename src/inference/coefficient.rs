//! Coefficient confidence intervals.

use super::quantile::t_quantile;
use crate::core::{ConfidenceInterval, IntervalError, QuantileRule};
use crate::utils::{centered_squares, mean};
use faer::Col;

/// Computes confidence intervals for the intercept and slope of a fitted line.
pub struct CoefficientInterval;

impl CoefficientInterval {
    /// Confidence interval for the intercept.
    ///
    /// m = σ̂/√df, q = F⁻¹(level; df), CI = α ± q·m
    pub fn intercept(
        sigma_hat: f64,
        intercept: f64,
        level: f64,
        df: usize,
    ) -> Result<ConfidenceInterval, IntervalError> {
        check_scale(sigma_hat)?;
        let q = t_quantile(level, df, QuantileRule::OneSided)?;
        Ok(ConfidenceInterval::around(
            intercept,
            q,
            Self::intercept_margin(sigma_hat, df)?,
        ))
    }

    /// Confidence interval for the slope.
    ///
    /// m = √n·σ̂/(√df·Sxx), q = F⁻¹(level; df), CI = β ± q·m
    ///
    /// Constant `x` (Sxx = 0) is reported as `SingularDesign`.
    pub fn slope(
        sigma_hat: f64,
        slope: f64,
        level: f64,
        df: usize,
        x: &Col<f64>,
        n: usize,
    ) -> Result<ConfidenceInterval, IntervalError> {
        if x.nrows() != n {
            return Err(IntervalError::DimensionMismatch {
                expected: n,
                got: x.nrows(),
            });
        }
        check_scale(sigma_hat)?;
        let q = t_quantile(level, df, QuantileRule::OneSided)?;
        let sxx: f64 = centered_squares(x, mean(x)).iter().sum();
        let margin = Self::slope_margin(sigma_hat, df, sxx, n)?;
        Ok(ConfidenceInterval::around(slope, q, margin))
    }

    /// σ̂/√df.
    pub fn intercept_margin(sigma_hat: f64, df: usize) -> Result<f64, IntervalError> {
        check_df(df)?;
        check_scale(sigma_hat)?;
        Ok(sigma_hat / (df as f64).sqrt())
    }

    /// √n·σ̂/(√df·Sxx).
    pub fn slope_margin(sigma_hat: f64, df: usize, sxx: f64, n: usize) -> Result<f64, IntervalError> {
        check_df(df)?;
        check_scale(sigma_hat)?;
        check_sxx(sxx)?;
        Ok((n as f64).sqrt() * sigma_hat / ((df as f64).sqrt() * sxx))
    }

    /// SE(α) = σ̂·√(1/n + x̄²/Sxx).
    pub fn intercept_standard_error(
        sigma_hat: f64,
        n: usize,
        x_mean: f64,
        sxx: f64,
    ) -> Result<f64, IntervalError> {
        if n < 3 {
            return Err(IntervalError::DegenerateSample { observations: n });
        }
        check_scale(sigma_hat)?;
        check_sxx(sxx)?;
        Ok(sigma_hat * (1.0 / n as f64 + x_mean * x_mean / sxx).sqrt())
    }

    /// SE(β) = σ̂/√Sxx.
    pub fn slope_standard_error(sigma_hat: f64, sxx: f64) -> Result<f64, IntervalError> {
        check_scale(sigma_hat)?;
        check_sxx(sxx)?;
        Ok(sigma_hat / sxx.sqrt())
    }
}

fn check_df(df: usize) -> Result<(), IntervalError> {
    if df == 0 {
        Err(IntervalError::DegenerateSample {
            observations: df + 2,
        })
    } else {
        Ok(())
    }
}

pub(crate) fn check_scale(sigma_hat: f64) -> Result<(), IntervalError> {
    if sigma_hat.is_finite() && sigma_hat >= 0.0 {
        Ok(())
    } else {
        Err(IntervalError::InvalidScale(sigma_hat))
    }
}

pub(crate) fn check_sxx(sxx: f64) -> Result<(), IntervalError> {
    if sxx > 0.0 && sxx.is_finite() {
        Ok(())
    } else {
        Err(IntervalError::SingularDesign)
    }
}
