//! Interval estimation for a fitted line on a sample.

use super::coefficient::CoefficientInterval;
use super::prediction::compute_band;
use super::quantile::t_quantile;
use crate::core::{
    ConfidenceInterval, FittedLine, IntervalError, IntervalOptions, IntervalOptionsBuilder,
    IntervalType, MarginRule, PredictionBand, QuantileRule, ResidualScale, Sample, ScaleEstimator,
};
use crate::utils::centered_squares;
use faer::Col;

/// Everything computed for one (sample, line) pair.
#[derive(Debug, Clone)]
pub struct IntervalSummary {
    /// Line the intervals were computed for.
    pub line: FittedLine,
    /// Residual scale σ̂.
    pub sigma_hat: f64,
    /// Degrees of freedom `n - 2`.
    pub degrees_of_freedom: usize,
    /// Student-t critical value.
    pub quantile: f64,
    /// Confidence level used.
    pub confidence_level: f64,
    /// Intercept interval.
    pub intercept: ConfidenceInterval,
    /// Slope interval.
    pub slope: ConfidenceInterval,
    /// Band over the sample's x-values in ascending order.
    pub band: PredictionBand,
}

/// Student-t interval estimator for a straight-line fit.
///
/// # Example
///
/// ```rust,ignore
/// use regress_intervals::prelude::*;
///
/// let sample = Sample::from_slices(&x, &y)?;
/// let line = LeastSquaresLine.fit(&sample)?;
///
/// let summary = IntervalEstimator::builder()
///     .confidence_level(0.95)
///     .build()
///     .estimate(&sample, &line)?;
///
/// println!("slope in [{}, {}]", summary.slope.lower, summary.slope.upper);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntervalEstimator {
    options: IntervalOptions,
}

impl IntervalEstimator {
    /// Create a new estimator with the given options.
    pub fn new(options: IntervalOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the estimator.
    pub fn builder() -> IntervalEstimatorBuilder {
        IntervalEstimatorBuilder::default()
    }

    pub fn options(&self) -> &IntervalOptions {
        &self.options
    }

    /// Residual scale for `line` on `sample` under the configured estimator.
    pub fn scale(&self, sample: &Sample, line: &FittedLine) -> ResidualScale {
        ResidualScale::estimate(sample, line, self.options.scale_estimator)
    }

    /// Critical value for `df` degrees of freedom under the configured rule.
    pub fn quantile(&self, df: usize) -> Result<f64, IntervalError> {
        self.options.validate()?;
        t_quantile(self.options.confidence_level, df, self.options.quantile_rule)
    }

    /// Compute σ̂, both coefficient intervals and the band over the sorted sample.
    pub fn estimate(
        &self,
        sample: &Sample,
        line: &FittedLine,
    ) -> Result<IntervalSummary, IntervalError> {
        let sorted = sample.sorted_by_x();
        let df = sorted.degrees_of_freedom();
        let q = self.quantile(df)?;

        let sigma_hat = self.scale(&sorted, line).value();
        if sigma_hat == 0.0 {
            tracing::warn!(
                estimator = ?self.options.scale_estimator,
                "residual scale is zero; intervals collapse to the point estimates"
            );
        }

        let (intercept, slope) = self.coefficient_intervals(&sorted, line, sigma_hat, q)?;
        let band = compute_band(
            line,
            sigma_hat,
            sorted.x(),
            &sorted.centered_squares(),
            sorted.sxx(),
            sorted.len(),
            q,
            self.options.interval_type,
        )?;

        tracing::debug!(
            n = sorted.len(),
            df,
            sigma_hat,
            quantile = q,
            intercept_width = intercept.width(),
            slope_width = slope.width(),
            "estimated intervals"
        );

        Ok(IntervalSummary {
            line: *line,
            sigma_hat,
            degrees_of_freedom: df,
            quantile: q,
            confidence_level: self.options.confidence_level,
            intercept,
            slope,
            band,
        })
    }

    /// Evaluate the band on an arbitrary grid, using the sample's x̄ and Sxx.
    pub fn band_over(
        &self,
        sample: &Sample,
        line: &FittedLine,
        grid: &Col<f64>,
    ) -> Result<PredictionBand, IntervalError> {
        let q = self.quantile(sample.degrees_of_freedom())?;
        let sigma_hat = self.scale(sample, line).value();
        let x_star = centered_squares(grid, sample.x_mean());

        compute_band(
            line,
            sigma_hat,
            grid,
            &x_star,
            sample.sxx(),
            sample.len(),
            q,
            self.options.interval_type,
        )
    }

    fn coefficient_intervals(
        &self,
        sample: &Sample,
        line: &FittedLine,
        sigma_hat: f64,
        q: f64,
    ) -> Result<(ConfidenceInterval, ConfidenceInterval), IntervalError> {
        let n = sample.len();
        let df = sample.degrees_of_freedom();
        let sxx = sample.sxx();

        let (intercept_margin, slope_margin) = match self.options.margin_rule {
            MarginRule::Simplified => (
                CoefficientInterval::intercept_margin(sigma_hat, df)?,
                CoefficientInterval::slope_margin(sigma_hat, df, sxx, n)?,
            ),
            MarginRule::Classical => (
                CoefficientInterval::intercept_standard_error(sigma_hat, n, sample.x_mean(), sxx)?,
                CoefficientInterval::slope_standard_error(sigma_hat, sxx)?,
            ),
        };

        Ok((
            ConfidenceInterval::around(line.intercept, q, intercept_margin),
            ConfidenceInterval::around(line.slope, q, slope_margin),
        ))
    }
}

/// Builder for `IntervalEstimator`.
#[derive(Debug, Clone, Default)]
pub struct IntervalEstimatorBuilder {
    builder: IntervalOptionsBuilder,
}

impl IntervalEstimatorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence level.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set the critical value convention.
    pub fn quantile_rule(mut self, rule: QuantileRule) -> Self {
        self.builder = self.builder.quantile_rule(rule);
        self
    }

    /// Set the coefficient margin convention.
    pub fn margin_rule(mut self, rule: MarginRule) -> Self {
        self.builder = self.builder.margin_rule(rule);
        self
    }

    /// Set the residual scale estimator.
    pub fn scale_estimator(mut self, estimator: ScaleEstimator) -> Self {
        self.builder = self.builder.scale_estimator(estimator);
        self
    }

    /// Set the band type.
    pub fn interval_type(mut self, interval_type: IntervalType) -> Self {
        self.builder = self.builder.interval_type(interval_type);
        self
    }

    /// Build the estimator. Options are validated when intervals are computed.
    pub fn build(self) -> IntervalEstimator {
        IntervalEstimator::new(self.builder.build_unchecked())
    }
}
