//! Two-sided interval type.

/// A closed interval `[lower, upper]` around a point estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Interval `center ± q·margin`.
    pub fn around(center: f64, quantile: f64, margin: f64) -> Self {
        let half_width = quantile * margin;
        Self {
            lower: center - half_width,
            upper: center + half_width,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Whether `value` lies inside the interval (bounds included).
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_around_is_symmetric() {
        let ci = ConfidenceInterval::around(1.5, 2.0, 0.25);
        assert!((ci.lower - 1.0).abs() < 1e-12);
        assert!((ci.upper - 2.0).abs() < 1e-12);
        assert!((ci.midpoint() - 1.5).abs() < 1e-12);
        assert!((ci.width() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_contains_bounds() {
        let ci = ConfidenceInterval::new(0.0, 1.0);
        assert!(ci.contains(0.0));
        assert!(ci.contains(1.0));
        assert!(!ci.contains(1.0 + 1e-9));
        assert_eq!(ci.as_tuple(), (0.0, 1.0));
    }
}
