//! Common test utilities and data generators.

#![allow(dead_code)]

use regress_intervals::core::Sample;

/// Generate y = intercept + slope * x + noise with x spread over [-1, 1].
pub fn generate_linear_sample(
    n_samples: usize,
    intercept: f64,
    slope: f64,
    noise_std: f64,
    seed: u64,
) -> Sample {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut x = Vec::with_capacity(n_samples);
    let mut y = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let xi = next_rand(&mut rng_state);
        x.push(xi);
        y.push(intercept + slope * xi + noise_std * next_rand(&mut rng_state));
    }

    Sample::from_slices(&x, &y).expect("generated sample is valid")
}

/// Five evenly spaced points on y = 1 + 2x over [0, 1].
pub fn noiseless_sample() -> Sample {
    Sample::from_slices(&[0.0, 0.25, 0.5, 0.75, 1.0], &[1.0, 1.5, 2.0, 2.5, 3.0])
        .expect("sample is valid")
}
