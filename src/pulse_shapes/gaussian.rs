//! Gaussian pulse for GFSK/GMSK frequency shaping

use std::f64::consts::{LN_2, PI};

use super::GAUSSIAN_SPAN;
use crate::error::{SynthError, SynthResult};
use crate::traits::PulseShape;

/// Gaussian low-pass pulse, unit DC gain
#[derive(Debug, Clone)]
pub struct GaussianPulse {
    coeffs: Vec<f64>,
    bt: f64,
}

impl GaussianPulse {
    /// # Arguments
    /// * `samples_per_symbol` - Samples per symbol period
    /// * `bt` - Bandwidth-time product, > 0
    pub fn new(samples_per_symbol: usize, bt: f64) -> SynthResult<Self> {
        Ok(Self {
            coeffs: gaussian_taps(samples_per_symbol, bt)?,
            bt,
        })
    }

    pub fn bt(&self) -> f64 {
        self.bt
    }
}

impl PulseShape for GaussianPulse {
    fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

/// Gaussian taps spanning `GAUSSIAN_SPAN` symbols each side, normalized to unit sum
pub fn gaussian_taps(samples_per_symbol: usize, bt: f64) -> SynthResult<Vec<f64>> {
    if !(bt > 0.0) || !bt.is_finite() {
        return Err(SynthError::invalid("bt", bt));
    }
    if samples_per_symbol == 0 {
        return Err(SynthError::invalid("samples_per_symbol", 0.0));
    }

    let half = (GAUSSIAN_SPAN * samples_per_symbol) as i64;
    let sps = samples_per_symbol as f64;
    let k = 2.0 * PI * PI * bt * bt / LN_2;

    let mut taps: Vec<f64> = (-half..=half)
        .map(|n| {
            let t = n as f64 / sps;
            (-k * t * t).exp()
        })
        .collect();

    let sum: f64 = taps.iter().sum();
    if !(sum > 0.0) {
        return Err(SynthError::NumericalDegeneracy(format!(
            "gaussian taps sum to {} (bt={})",
            sum, bt
        )));
    }
    for t in &mut taps {
        *t /= sum;
    }
    Ok(taps)
}
