//! Summaries of posterior distributions.
//!
//! - **HPD**: narrowest interval holding a given share of posterior draws
//! - **Summary**: mean, standard deviation and HPD interval of a draw sequence
//! - **Beta-binomial**: closed-form posterior for a binomial likelihood with a beta prior,
//!   used to check sampled posteriors against the exact answer

mod conjugate;
mod hpd;

pub use conjugate::{BetaBinomial, BetaPosterior};
pub use hpd::{hpd_interval, PosteriorSummary};
