//! Highest posterior density intervals.

use crate::core::{ConfidenceInterval, IntervalError};
use crate::inference::validate_level;

/// Narrowest interval containing `mass` of the draws.
///
/// With N sorted draws and k = ⌊mass·N⌋, every window `[s_i, s_{i+k}]` is
/// compared and the first one of minimum width is returned.
pub fn hpd_interval(samples: &[f64], mass: f64) -> Result<ConfidenceInterval, IntervalError> {
    validate_level(mass)?;
    if samples.is_empty() {
        return Err(IntervalError::EmptySamples);
    }
    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(IntervalError::NonFiniteValue { index });
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let included = ((mass * n as f64).floor() as usize).min(n - 1);
    let n_windows = n - included;

    let mut best = 0;
    let mut best_width = f64::INFINITY;
    for i in 0..n_windows {
        let width = sorted[i + included] - sorted[i];
        if width < best_width {
            best_width = width;
            best = i;
        }
    }

    Ok(ConfidenceInterval::new(sorted[best], sorted[best + included]))
}

/// Point and interval summary of posterior draws for one parameter.
#[derive(Debug, Clone, Copy)]
pub struct PosteriorSummary {
    pub mean: f64,
    /// Standard deviation with divisor N.
    pub std: f64,
    pub hpd: ConfidenceInterval,
    pub n_samples: usize,
}

impl PosteriorSummary {
    pub fn from_samples(samples: &[f64], mass: f64) -> Result<Self, IntervalError> {
        let hpd = hpd_interval(samples, mass)?;
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            mean,
            std: var.sqrt(),
            hpd,
            n_samples: samples.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hpd_uniform_grid() {
        // 0, 1, ..., 99: k = 95, every window has width 95, first wins
        let samples: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let hpd = hpd_interval(&samples, 0.95).unwrap();

        assert!((hpd.lower - 0.0).abs() < 1e-12);
        assert!((hpd.upper - 95.0).abs() < 1e-12);
    }

    #[test]
    fn test_hpd_skips_outlier() {
        let mut samples = vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
        samples.push(100.0);
        let hpd = hpd_interval(&samples, 0.9).unwrap();

        assert!(hpd.upper < 1.0);
        assert!((hpd.lower - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_hpd_order_independent() {
        let a = [3.0, 1.0, 2.0, 5.0, 4.0];
        let b = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(
            hpd_interval(&a, 0.5).unwrap().as_tuple(),
            hpd_interval(&b, 0.5).unwrap().as_tuple()
        );
    }

    #[test]
    fn test_hpd_errors() {
        assert!(matches!(
            hpd_interval(&[], 0.95),
            Err(IntervalError::EmptySamples)
        ));
        assert!(matches!(
            hpd_interval(&[1.0, 2.0], 1.0),
            Err(IntervalError::InvalidConfidenceLevel(_))
        ));
        assert!(matches!(
            hpd_interval(&[1.0, f64::NAN], 0.5),
            Err(IntervalError::NonFiniteValue { index: 1 })
        ));
    }

    #[test]
    fn test_summary() {
        let summary = PosteriorSummary::from_samples(&[1.0, 2.0, 3.0, 4.0], 0.5).unwrap();
        assert!((summary.mean - 2.5).abs() < 1e-12);
        assert!((summary.std - 1.25_f64.sqrt()).abs() < 1e-12);
        assert_eq!(summary.n_samples, 4);
    }
}
