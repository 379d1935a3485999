//! Vector utility functions.

mod vector;

pub use vector::{center_vector, centered_squares, mean, population_std, sort_by_key};
