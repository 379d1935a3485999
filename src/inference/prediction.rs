//! Pointwise band calculations.

use super::coefficient::{check_scale, check_sxx};
use super::quantile::t_quantile;
use crate::core::{FittedLine, IntervalError, IntervalType, PredictionBand, QuantileRule};
use faer::Col;

/// Computes a prediction band for new observations along `grid`.
///
/// # Arguments
/// * `line` - Fitted intercept and slope
/// * `sigma_hat` - Residual scale σ̂
/// * `grid` - Points to evaluate the band at (sorted ascending for plotting)
/// * `x_star` - Squared deviations (gᵢ - x̄)², aligned with `grid`
/// * `sxx` - Centered sum of squares of the sample x-values
/// * `n` - Sample size; degrees of freedom are `n - 2`
/// * `level` - Confidence level (e.g., 0.95)
///
/// se(x) = σ̂·√(1 + 1/n + x*/Sxx), bounds are ŷ(x) ± q·se(x) with q = F⁻¹(level; n - 2).
pub fn compute_prediction_band(
    line: &FittedLine,
    sigma_hat: f64,
    grid: &Col<f64>,
    x_star: &Col<f64>,
    sxx: f64,
    n: usize,
    level: f64,
) -> Result<PredictionBand, IntervalError> {
    if n < 3 {
        return Err(IntervalError::DegenerateSample { observations: n });
    }
    let t_crit = t_quantile(level, n - 2, QuantileRule::OneSided)?;
    compute_band(
        line,
        sigma_hat,
        grid,
        x_star,
        sxx,
        n,
        t_crit,
        IntervalType::Prediction,
    )
}

/// Evaluate a band with an already computed critical value.
#[allow(clippy::too_many_arguments)]
pub fn compute_band(
    line: &FittedLine,
    sigma_hat: f64,
    grid: &Col<f64>,
    x_star: &Col<f64>,
    sxx: f64,
    n: usize,
    t_crit: f64,
    interval_type: IntervalType,
) -> Result<PredictionBand, IntervalError> {
    if x_star.nrows() != grid.nrows() {
        return Err(IntervalError::DimensionMismatch {
            expected: grid.nrows(),
            got: x_star.nrows(),
        });
    }
    if n < 3 {
        return Err(IntervalError::DegenerateSample { observations: n });
    }
    if !(t_crit.is_finite() && t_crit >= 0.0) {
        return Err(IntervalError::InvalidQuantile(t_crit));
    }
    check_scale(sigma_hat)?;
    check_sxx(sxx)?;

    let n_grid = grid.nrows();
    let base = interval_type.observation_term() + 1.0 / n as f64;

    let fit = line.predict_all(grid);
    let se = Col::from_fn(n_grid, |i| sigma_hat * (base + x_star[i] / sxx).sqrt());
    let lower = Col::from_fn(n_grid, |i| fit[i] - t_crit * se[i]);
    let upper = Col::from_fn(n_grid, |i| fit[i] + t_crit * se[i]);

    Ok(PredictionBand {
        x: grid.clone(),
        fit,
        lower,
        upper,
        se,
    })
}
