//! Numerically Controlled Oscillator (NCO)
//!
//! Complex exponential at a normalized frequency (cycles per sample).
//! Phase-continuous across calls.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Complex Numerically Controlled Oscillator
#[derive(Debug, Clone)]
pub struct Nco {
    phase: f64,
    phase_inc: f64,
    freq: f64,
}

impl Nco {
    /// Create a new NCO at `freq` cycles per sample
    pub fn new(freq: f64) -> Self {
        Self {
            phase: 0.0,
            phase_inc: 2.0 * PI * freq,
            freq,
        }
    }

    /// Get the next exp(jφ) sample and advance phase
    pub fn next_sample(&mut self) -> Complex64 {
        let out = Complex64::from_polar(1.0, self.phase);
        self.phase += self.phase_inc;

        // Keep phase in [0, 2π) for numerical stability
        if self.phase >= 2.0 * PI {
            self.phase -= 2.0 * PI;
        } else if self.phase < 0.0 {
            self.phase += 2.0 * PI;
        }

        out
    }

    /// Multiply a block in place by the oscillator output
    pub fn mix(&mut self, samples: &mut [Complex64]) {
        for s in samples.iter_mut() {
            *s *= self.next_sample();
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn frequency(&self) -> f64 {
        self.freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nco_starts_at_zero_phase() {
        let mut nco = Nco::new(0.125);
        let first = nco.next_sample();
        assert!((first - Complex64::new(1.0, 0.0)).norm() < 1e-15);
    }

    #[test]
    fn test_nco_matches_direct_exponential() {
        let mut nco = Nco::new(0.125);
        for n in 0..1000 {
            let expected = Complex64::from_polar(1.0, 2.0 * PI * 0.125 * n as f64);
            let got = nco.next_sample();
            assert!((got - expected).norm() < 1e-9, "n={}", n);
        }
    }

    #[test]
    fn test_nco_reset() {
        // 1.3 cycles, so the phase does not wrap back onto 0
        let mut nco = Nco::new(0.013);
        for _ in 0..100 {
            nco.next_sample();
        }
        assert!(nco.phase() > 0.0);

        nco.reset();
        assert_eq!(nco.phase(), 0.0);
    }

    #[test]
    fn test_nco_negative_frequency_wraps() {
        let mut nco = Nco::new(-0.3);
        for _ in 0..10000 {
            nco.next_sample();
        }
        assert!(nco.phase() >= 0.0 && nco.phase() < 2.0 * PI);
        assert_eq!(nco.frequency(), -0.3);
    }
}
