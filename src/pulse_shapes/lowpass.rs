//! Blackman-windowed sinc low-pass filter
//!
//! Cutoff and transition width are in cycles per sample (fs = 1, Nyquist
//! at 0.5). Taps are scaled for unit gain at DC.

use std::f64::consts::PI;

use super::{blackman, filter_length_estimate};
use crate::error::{SynthError, SynthResult};
use crate::traits::PulseShape;

/// Linear-phase FIR low-pass
#[derive(Debug, Clone)]
pub struct LowPass {
    coeffs: Vec<f64>,
    cutoff: f64,
}

impl LowPass {
    /// Design with a tap count derived from the transition width
    pub fn new(cutoff: f64, transition_bandwidth: f64) -> SynthResult<Self> {
        Ok(Self {
            coeffs: lowpass_taps(cutoff, transition_bandwidth)?,
            cutoff,
        })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl PulseShape for LowPass {
    fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

/// Low-pass taps, length from `filter_length_estimate(transition_bandwidth)`
pub fn lowpass_taps(cutoff: f64, transition_bandwidth: f64) -> SynthResult<Vec<f64>> {
    let num_taps = filter_length_estimate(transition_bandwidth)?;
    windowed_sinc(num_taps, cutoff)
}

fn windowed_sinc(num_taps: usize, cutoff: f64) -> SynthResult<Vec<f64>> {
    if !(cutoff > 0.0 && cutoff < 0.5) {
        return Err(SynthError::invalid("cutoff", cutoff));
    }
    if num_taps == 0 {
        return Err(SynthError::NumericalDegeneracy("low-pass with zero taps".into()));
    }

    let center = (num_taps - 1) as f64 / 2.0;
    let window = blackman(num_taps);

    let mut coeffs: Vec<f64> = window
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let n = i as f64 - center;
            let sinc = if n.abs() < 1e-12 {
                2.0 * cutoff
            } else {
                (2.0 * PI * cutoff * n).sin() / (PI * n)
            };
            sinc * w
        })
        .collect();

    let sum: f64 = coeffs.iter().sum();
    if sum.abs() < 1e-12 {
        return Err(SynthError::NumericalDegeneracy(format!(
            "low-pass taps sum to {} ({} taps, cutoff {})",
            sum, num_taps, cutoff
        )));
    }
    for c in &mut coeffs {
        *c /= sum;
    }
    Ok(coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn gain_at(taps: &[f64], freq: f64) -> f64 {
        taps.iter()
            .enumerate()
            .map(|(n, &h)| Complex64::from_polar(h, -2.0 * PI * freq * n as f64))
            .sum::<Complex64>()
            .norm()
    }

    #[test]
    fn test_lowpass_unit_dc_gain() {
        let taps = lowpass_taps(0.3, 0.05).unwrap();
        assert_eq!(taps.len(), 65);
        assert!((taps.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_lowpass_stopband() {
        let taps = lowpass_taps(0.2, 0.05).unwrap();
        assert!((gain_at(&taps, 0.05) - 1.0).abs() < 0.01);
        assert!(gain_at(&taps, 0.35) < 1e-3);
        assert!(gain_at(&taps, 0.45) < 1e-3);
    }

    #[test]
    fn test_lowpass_symmetric() {
        let c = windowed_sinc(101, 0.125).unwrap();
        for i in 0..50 {
            assert!((c[i] - c[100 - i]).abs() < 1e-15);
        }
    }

    #[test]
    fn test_lowpass_rejects_bad_parameters() {
        assert!(lowpass_taps(0.0, 0.05).is_err());
        assert!(lowpass_taps(0.6, 0.05).is_err());
        assert!(lowpass_taps(0.25, 0.0).is_err());
        assert!(windowed_sinc(0, 0.25).is_err());
    }
}
