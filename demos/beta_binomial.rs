//! # Beta-Binomial Posterior
//!
//! Uniform Beta(1, 1) prior, 10 successes in 50 trials. Compares 100,000 direct
//! posterior draws against the exact Beta(11, 41) posterior.
//!
//! Run with: `cargo run --example beta_binomial`

use rand::rngs::StdRng;
use rand::SeedableRng;
use regress_intervals::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Beta-Binomial Posterior ===\n");

    let model = BetaBinomial::default();
    let (trials, successes) = (50, 10);
    let posterior = model
        .posterior(trials, successes)
        .expect("successes do not exceed trials");

    println!(
        "Prior: Beta({}, {}), observed {} / {}",
        model.prior_alpha, model.prior_beta, successes, trials
    );
    println!(
        "Posterior: Beta({}, {}), mean {:.4}\n",
        posterior.alpha(),
        posterior.beta(),
        posterior.mean()
    );

    let mut rng = StdRng::seed_from_u64(1);
    let draws = posterior
        .sample_n(&mut rng, 100_000)
        .expect("posterior parameters are valid");
    let summary = PosteriorSummary::from_samples(&draws, 0.95).expect("draws are non-empty");
    let exact = posterior
        .credible_interval(0.95)
        .expect("level is in (0, 1)");

    println!("Draws: mean {:.4}, sd {:.4}", summary.mean, summary.std);
    println!(
        "95% HPD from draws: [{:.4}, {:.4}]",
        summary.hpd.lower, summary.hpd.upper
    );
    println!(
        "95% equal-tailed (exact): [{:.4}, {:.4}]\n",
        exact.lower, exact.upper
    );

    let prior = model.prior().expect("prior parameters are valid");
    let (grid, density) = posterior.density_grid(11);
    println!("{:>6} {:>10} {:>10}", "p", "prior", "posterior");
    for i in 0..grid.nrows() {
        println!(
            "{:>6.2} {:>10.4} {:>10.4}",
            grid[i],
            prior.pdf(grid[i]),
            density[i]
        );
    }
}
