//! Gaussian noise source
//!
//! Uses Box-Muller transform for Gaussian samples, drawing uniforms from
//! the caller's scoped generator.

use rand::Rng;
use std::f64::consts::PI;

/// Gaussian sample generator with configurable power
#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    /// Standard deviation (sqrt of noise power)
    std_dev: f64,

    /// Cached second sample from Box-Muller
    cached: Option<f64>,
}

impl NoiseGenerator {
    pub fn new(noise_power: f64) -> Self {
        Self {
            std_dev: noise_power.sqrt(),
            cached: None,
        }
    }

    /// Unit-variance generator
    pub fn standard() -> Self {
        Self::new(1.0)
    }

    /// Generate next Gaussian sample
    pub fn next_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if let Some(cached) = self.cached.take() {
            return cached * self.std_dev;
        }

        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();

        // Avoid log(0)
        let u1 = u1.max(1e-10);

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        self.cached = Some(r * theta.sin());
        r * theta.cos() * self.std_dev
    }

    /// Draw `n` samples
    pub fn samples<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_sample(rng)).collect()
    }
}
