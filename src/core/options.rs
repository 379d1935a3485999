//! Interval estimation options and configuration.

use super::prediction::IntervalType;
use thiserror::Error;

/// How the Student-t critical value is taken from the confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantileRule {
    /// q = F⁻¹(p). A level of 0.95 uses the 95th percentile of the t-distribution.
    #[default]
    OneSided,
    /// q = F⁻¹(1 - (1 - p) / 2), the usual two-sided critical value.
    TwoSided,
}

impl QuantileRule {
    /// Cumulative probability at which the t-distribution is inverted.
    pub fn probability(self, level: f64) -> f64 {
        match self {
            QuantileRule::OneSided => level,
            QuantileRule::TwoSided => 1.0 - (1.0 - level) / 2.0,
        }
    }
}

/// How the half-width of a coefficient interval is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarginRule {
    /// Intercept margin σ̂/√df, slope margin √n·σ̂/(√df·Sxx).
    #[default]
    Simplified,
    /// Textbook standard errors:
    /// SE(α) = σ̂·√(1/n + x̄²/Sxx), SE(β) = σ̂/√Sxx.
    Classical,
}

/// Estimator used for the residual scale σ̂.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleEstimator {
    /// Population standard deviation of the fitted values over the sorted x grid.
    ///
    /// This equals |β|·sd(x) and does not shrink with the noise level.
    #[default]
    FittedSpread,
    /// √(RSS / (n - 2)).
    ResidualStandardError,
}

/// Configuration options for interval estimation.
#[derive(Debug, Clone)]
pub struct IntervalOptions {
    /// Confidence level for intervals (default: 0.95).
    pub confidence_level: f64,
    /// Critical value convention (default: one-sided).
    pub quantile_rule: QuantileRule,
    /// Coefficient margin convention (default: simplified).
    pub margin_rule: MarginRule,
    /// Residual scale estimator (default: fitted spread).
    pub scale_estimator: ScaleEstimator,
    /// Band type (default: prediction).
    pub interval_type: IntervalType,
}

impl Default for IntervalOptions {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            quantile_rule: QuantileRule::OneSided,
            margin_rule: MarginRule::Simplified,
            scale_estimator: ScaleEstimator::FittedSpread,
            interval_type: IntervalType::Prediction,
        }
    }
}

/// Errors that can occur when validating interval options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
}

impl IntervalOptions {
    /// Create a new builder for interval options.
    pub fn builder() -> IntervalOptionsBuilder {
        IntervalOptionsBuilder::default()
    }

    /// The reference arithmetic: one-sided quantile, simplified margins, fitted-spread scale.
    pub fn simplified() -> Self {
        Self::default()
    }

    /// Textbook OLS inference: two-sided quantile, classical standard errors,
    /// residual standard error.
    pub fn classical() -> Self {
        Self {
            quantile_rule: QuantileRule::TwoSided,
            margin_rule: MarginRule::Classical,
            scale_estimator: ScaleEstimator::ResidualStandardError,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        // NaN fails both comparisons, so test the accepted range instead.
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        Ok(())
    }
}

/// Builder for `IntervalOptions`.
#[derive(Debug, Clone, Default)]
pub struct IntervalOptionsBuilder {
    options: IntervalOptions,
}

impl IntervalOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence level.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Set the critical value convention.
    pub fn quantile_rule(mut self, rule: QuantileRule) -> Self {
        self.options.quantile_rule = rule;
        self
    }

    /// Set the coefficient margin convention.
    pub fn margin_rule(mut self, rule: MarginRule) -> Self {
        self.options.margin_rule = rule;
        self
    }

    /// Set the residual scale estimator.
    pub fn scale_estimator(mut self, estimator: ScaleEstimator) -> Self {
        self.options.scale_estimator = estimator;
        self
    }

    /// Set the band type.
    pub fn interval_type(mut self, interval_type: IntervalType) -> Self {
        self.options.interval_type = interval_type;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<IntervalOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> IntervalOptions {
        self.options
    }
}
