//! Band types for pointwise interval estimation.

use faer::Col;

/// Type of band to compute around a fitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalType {
    /// Band for the line itself, α + β·x₀.
    /// se(x₀) = σ̂·√(1/n + x*/Sxx).
    Confidence,

    /// Band for a fresh y drawn at x₀.
    /// se(x₀) = σ̂·√(1 + 1/n + x*/Sxx).
    #[default]
    Prediction,
}

impl IntervalType {
    /// Constant term under the square root of the standard error:
    /// `1` for prediction bands, `0` for confidence bands.
    pub(crate) fn observation_term(self) -> f64 {
        match self {
            IntervalType::Confidence => 0.0,
            IntervalType::Prediction => 1.0,
        }
    }
}

/// Pointwise band aligned index-for-index with an x grid.
#[derive(Debug, Clone)]
pub struct PredictionBand {
    /// Grid the band was evaluated on.
    pub x: Col<f64>,
    /// Fitted values ŷ(x).
    pub fit: Col<f64>,
    /// Lower bounds.
    pub lower: Col<f64>,
    /// Upper bounds.
    pub upper: Col<f64>,
    /// Standard errors at each grid point.
    pub se: Col<f64>,
}

impl PredictionBand {
    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    /// Returns true if the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.x.nrows() == 0
    }

    /// Band width (upper - lower) at each grid point.
    pub fn widths(&self) -> Col<f64> {
        Col::from_fn(self.len(), |i| self.upper[i] - self.lower[i])
    }
}
