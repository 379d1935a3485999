//! Synthetic linear data.

use crate::core::{IntervalError, Sample};
use faer::Col;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Generator for y = intercept + slope·x + ε with x ~ U[0, 1) and ε ~ N(noise_mean, noise_std).
#[derive(Debug, Clone, Copy)]
pub struct LinearSimulation {
    /// Number of observations.
    pub n: usize,
    pub intercept: f64,
    pub slope: f64,
    pub noise_mean: f64,
    pub noise_std: f64,
}

impl Default for LinearSimulation {
    fn default() -> Self {
        Self {
            n: 100,
            intercept: 1.0,
            slope: 2.0,
            noise_mean: 0.0,
            noise_std: 0.5,
        }
    }
}

impl LinearSimulation {
    pub fn new(n: usize, intercept: f64, slope: f64, noise_mean: f64, noise_std: f64) -> Self {
        Self {
            n,
            intercept,
            slope,
            noise_mean,
            noise_std,
        }
    }

    /// Same line and sample size without noise.
    pub fn noiseless(self) -> Self {
        Self {
            noise_mean: 0.0,
            noise_std: 0.0,
            ..self
        }
    }

    /// Draw one sample.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sample, IntervalError> {
        let noise = Normal::new(self.noise_mean, self.noise_std)
            .map_err(|_| IntervalError::InvalidScale(self.noise_std))?;

        let x: Vec<f64> = (0..self.n).map(|_| rng.gen::<f64>()).collect();
        let y: Vec<f64> = x
            .iter()
            .map(|&xi| self.intercept + self.slope * xi + noise.sample(rng))
            .collect();

        Sample::new(
            Col::from_fn(self.n, |i| x[i]),
            Col::from_fn(self.n, |i| y[i]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_noiseless_points_on_line() {
        let mut rng = StdRng::seed_from_u64(42);
        let sim = LinearSimulation::default().noiseless();
        let sample = sim.simulate(&mut rng).unwrap();

        assert_eq!(sample.len(), 100);
        for i in 0..sample.len() {
            let x = sample.x()[i];
            assert!((0.0..1.0).contains(&x));
            assert!((sample.y()[i] - (1.0 + 2.0 * x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let sim = LinearSimulation::default();
        let a = sim.simulate(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = sim.simulate(&mut StdRng::seed_from_u64(7)).unwrap();

        for i in 0..a.len() {
            assert_eq!(a.x()[i], b.x()[i]);
            assert_eq!(a.y()[i], b.y()[i]);
        }
    }

    #[test]
    fn test_negative_noise_rejected() {
        let sim = LinearSimulation::new(10, 0.0, 1.0, 0.0, -1.0);
        let result = sim.simulate(&mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(IntervalError::InvalidScale(_))));
    }

    #[test]
    fn test_too_few_points_rejected() {
        let sim = LinearSimulation::new(2, 0.0, 1.0, 0.0, 1.0);
        let result = sim.simulate(&mut StdRng::seed_from_u64(1));
        assert!(matches!(
            result,
            Err(IntervalError::DegenerateSample { observations: 2 })
        ));
    }
}
