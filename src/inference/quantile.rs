//! Student-t critical values.

use crate::core::{IntervalError, QuantileRule};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Reject confidence levels outside the open interval (0, 1).
pub fn validate_level(level: f64) -> Result<(), IntervalError> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(IntervalError::InvalidConfidenceLevel(level))
    }
}

/// Critical value of the standard t-distribution with `df` degrees of freedom.
///
/// Under `QuantileRule::OneSided` the level must exceed 0.5; below that the
/// critical value is negative and every interval would come out inverted.
/// `df = 0` is reported as a degenerate sample of `df + 2 = 2` observations.
pub fn t_quantile(level: f64, df: usize, rule: QuantileRule) -> Result<f64, IntervalError> {
    validate_level(level)?;
    if rule == QuantileRule::OneSided && level <= 0.5 {
        return Err(IntervalError::InvalidConfidenceLevel(level));
    }
    if df == 0 {
        return Err(IntervalError::DegenerateSample {
            observations: df + 2,
        });
    }

    let t_dist = StudentsT::new(0.0, 1.0, df as f64)
        .map_err(|e| IntervalError::Distribution(e.to_string()))?;
    let quantile = t_dist.inverse_cdf(rule.probability(level));

    tracing::debug!(level, df, ?rule, quantile, "student-t critical value");
    Ok(quantile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_sided_known_value() {
        // qt(0.95, 3) in R
        let q = t_quantile(0.95, 3, QuantileRule::OneSided).unwrap();
        assert!((q - 2.353_363_434_801_826).abs() < 1e-6);
    }

    #[test]
    fn test_two_sided_known_value() {
        // qt(0.975, 3) in R
        let q = t_quantile(0.95, 3, QuantileRule::TwoSided).unwrap();
        assert!((q - 3.182_446_305_284_263).abs() < 1e-6);
    }

    #[test]
    fn test_zero_df_is_degenerate() {
        assert!(matches!(
            t_quantile(0.95, 0, QuantileRule::OneSided),
            Err(IntervalError::DegenerateSample { observations: 2 })
        ));
    }

    #[test]
    fn test_level_out_of_range() {
        for level in [0.0, 1.0, 1.2, -0.1, f64::NAN] {
            assert!(matches!(
                t_quantile(level, 10, QuantileRule::OneSided),
                Err(IntervalError::InvalidConfidenceLevel(_))
            ));
        }
    }

    #[test]
    fn test_one_sided_rejects_levels_up_to_half() {
        for level in [0.3, 0.5] {
            assert!(matches!(
                t_quantile(level, 3, QuantileRule::OneSided),
                Err(IntervalError::InvalidConfidenceLevel(_))
            ));
        }
    }

    #[test]
    fn test_two_sided_accepts_low_levels() {
        let q = t_quantile(0.3, 3, QuantileRule::TwoSided).unwrap();
        assert!(q > 0.0);
    }

    #[test]
    fn test_quantile_increases_with_level() {
        let q90 = t_quantile(0.90, 20, QuantileRule::OneSided).unwrap();
        let q99 = t_quantile(0.99, 20, QuantileRule::OneSided).unwrap();
        assert!(q99 > q90);
    }
}
