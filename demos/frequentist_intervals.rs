//! # Frequentist Intervals for a Simulated Line
//!
//! Simulates y = 1 + 2x + N(0, 0.5²) on 100 points, fits a least-squares line and
//! prints 95% intervals for the intercept and slope, plus the prediction band at a
//! few grid points. Both the simplified arithmetic and classical OLS inference are
//! shown side by side.
//!
//! Run with: `cargo run --example frequentist_intervals`
//! Set `RUST_LOG=debug` to see the critical values and scales as they are computed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use regress_intervals::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Frequentist Intervals ===\n");

    let simulation = LinearSimulation::default();
    let mut rng = StdRng::seed_from_u64(42);
    let sample = simulation
        .simulate(&mut rng)
        .expect("simulation should succeed");

    let line = LeastSquaresLine.fit(&sample).expect("fit should succeed");
    println!(
        "True model: y = {} + {}*x + N({}, {}²)",
        simulation.intercept, simulation.slope, simulation.noise_mean, simulation.noise_std
    );
    println!("Estimated intercept: {:.4}", line.intercept);
    println!("Estimated slope: {:.4}\n", line.slope);

    report("Simplified (fitted-spread scale)", IntervalOptions::simplified(), &sample, &line);
    report("Classical OLS inference", IntervalOptions::classical(), &sample, &line);
}

fn report(title: &str, options: IntervalOptions, sample: &Sample, line: &FittedLine) {
    println!("--- {} ---\n", title);

    let summary = IntervalEstimator::new(options)
        .estimate(sample, line)
        .expect("estimate should succeed");

    println!("sigma_hat: {:.4}", summary.sigma_hat);
    println!(
        "t quantile (df = {}): {:.4}",
        summary.degrees_of_freedom, summary.quantile
    );
    println!(
        "Intercept {:.0}% CI: [{:.4}, {:.4}]",
        summary.confidence_level * 100.0,
        summary.intercept.lower,
        summary.intercept.upper
    );
    println!(
        "Slope {:.0}% CI: [{:.4}, {:.4}]",
        summary.confidence_level * 100.0,
        summary.slope.lower,
        summary.slope.upper
    );

    println!("\n{:>8} {:>10} {:>10} {:>10}", "x", "lower", "fit", "upper");
    let band = &summary.band;
    let step = (band.len() / 5).max(1);
    for i in (0..band.len()).step_by(step) {
        println!(
            "{:>8.4} {:>10.4} {:>10.4} {:>10.4}",
            band.x[i], band.lower[i], band.fit[i], band.upper[i]
        );
    }
    println!();
}
