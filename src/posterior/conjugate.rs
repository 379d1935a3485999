//! Beta prior with binomial likelihood.

use crate::core::{ConfidenceInterval, IntervalError};
use crate::inference::validate_level;
use faer::Col;
use rand::Rng;
use rand_distr::Distribution as _;
use statrs::distribution::{Beta, Continuous, ContinuousCDF};

/// Beta(prior_alpha, prior_beta) prior on a success probability.
#[derive(Debug, Clone, Copy)]
pub struct BetaBinomial {
    pub prior_alpha: f64,
    pub prior_beta: f64,
}

impl Default for BetaBinomial {
    /// Uniform prior Beta(1, 1).
    fn default() -> Self {
        Self {
            prior_alpha: 1.0,
            prior_beta: 1.0,
        }
    }
}

impl BetaBinomial {
    pub fn new(prior_alpha: f64, prior_beta: f64) -> Self {
        Self {
            prior_alpha,
            prior_beta,
        }
    }

    /// The prior as a distribution.
    pub fn prior(&self) -> Result<BetaPosterior, IntervalError> {
        BetaPosterior::new(self.prior_alpha, self.prior_beta)
    }

    /// Posterior after `successes` out of `trials`: Beta(α + z, β + n - z).
    pub fn posterior(&self, trials: u64, successes: u64) -> Result<BetaPosterior, IntervalError> {
        if successes > trials {
            return Err(IntervalError::InvalidObservation { trials, successes });
        }
        BetaPosterior::new(
            self.prior_alpha + successes as f64,
            self.prior_beta + (trials - successes) as f64,
        )
    }
}

/// Beta distribution over a success probability.
#[derive(Debug, Clone)]
pub struct BetaPosterior {
    alpha: f64,
    beta: f64,
    dist: Beta,
}

impl BetaPosterior {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, IntervalError> {
        let dist = Beta::new(alpha, beta).map_err(|e| IntervalError::Distribution(e.to_string()))?;
        Ok(Self { alpha, beta, dist })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    pub fn variance(&self) -> f64 {
        let ab = self.alpha + self.beta;
        self.alpha * self.beta / (ab * ab * (ab + 1.0))
    }

    pub fn pdf(&self, p: f64) -> f64 {
        self.dist.pdf(p)
    }

    /// Density on `points` evenly spaced values over [0, 1].
    pub fn density_grid(&self, points: usize) -> (Col<f64>, Col<f64>) {
        let step = if points > 1 {
            1.0 / (points - 1) as f64
        } else {
            0.0
        };
        let grid = Col::from_fn(points, |i| i as f64 * step);
        let density = Col::from_fn(points, |i| self.pdf(grid[i]));
        (grid, density)
    }

    /// Equal-tailed credible interval.
    pub fn credible_interval(&self, level: f64) -> Result<ConfidenceInterval, IntervalError> {
        validate_level(level)?;
        let tail = (1.0 - level) / 2.0;
        Ok(ConfidenceInterval::new(
            self.dist.inverse_cdf(tail),
            self.dist.inverse_cdf(1.0 - tail),
        ))
    }

    /// Independent draws from the distribution.
    pub fn sample_n<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<f64>, IntervalError> {
        let dist = rand_distr::Beta::new(self.alpha, self.beta)
            .map_err(|e| IntervalError::Distribution(e.to_string()))?;
        Ok((0..count).map(|_| dist.sample(rng)).collect())
    }
}
