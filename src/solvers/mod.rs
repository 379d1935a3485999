//! Line fitting collaborators.

mod line_fitter;

pub use line_fitter::{LeastSquaresLine, LineFitter};
