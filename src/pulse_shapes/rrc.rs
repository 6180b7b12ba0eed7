//! Root Raised Cosine (RRC) pulse shaping filter
//!
//! Used to shape zero-stuffed constellation symbols. Taps are left
//! unnormalized: the center tap is `1 - α + 4α/π`.

use crate::error::{SynthError, SynthResult};
use crate::traits::PulseShape;
use std::f64::consts::PI;

/// Distance from t = ±1/(4α) inside which the closed-form limit is used
const SINGULARITY_TOL: f64 = 1e-9;

/// Root Raised Cosine filter
#[derive(Debug, Clone)]
pub struct RootRaisedCosine {
    coeffs: Vec<f64>,
    span: usize,
    alpha: f64,
}

impl RootRaisedCosine {
    /// Create a new RRC filter
    ///
    /// # Arguments
    /// * `span` - Filter span in symbols (each side of center)
    /// * `samples_per_symbol` - Number of samples per symbol period
    /// * `alpha` - Roll-off factor (excess bandwidth), in (0, 1]
    pub fn new(span: usize, samples_per_symbol: usize, alpha: f64) -> SynthResult<Self> {
        let coeffs = rrc_taps(span, samples_per_symbol, alpha)?;
        Ok(Self { coeffs, span, alpha })
    }

    pub fn span_symbols(&self) -> usize {
        self.span
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl PulseShape for RootRaisedCosine {
    fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

/// Generate RRC filter coefficients
///
/// Tap count is `2·span·samples_per_symbol + 1`. The removable
/// singularities at t = 0 and t = ±T/(4α) use their analytic limits.
pub fn rrc_taps(span: usize, samples_per_symbol: usize, alpha: f64) -> SynthResult<Vec<f64>> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(SynthError::invalid("alpha", alpha));
    }
    if samples_per_symbol == 0 {
        return Err(SynthError::invalid("samples_per_symbol", 0.0));
    }

    let filter_len = 2 * span * samples_per_symbol + 1;
    let center = (filter_len - 1) as f64 / 2.0;
    let singular_t = 1.0 / (4.0 * alpha);

    let coeffs = (0..filter_len)
        .map(|i| {
            // t in symbol periods, centered at 0
            let t = (i as f64 - center) / samples_per_symbol as f64;

            if t.abs() < SINGULARITY_TOL {
                1.0 + alpha * (4.0 / PI - 1.0)
            } else if (t.abs() - singular_t).abs() < SINGULARITY_TOL {
                let term1 = (1.0 + 2.0 / PI) * (PI / (4.0 * alpha)).sin();
                let term2 = (1.0 - 2.0 / PI) * (PI / (4.0 * alpha)).cos();
                alpha / 2.0_f64.sqrt() * (term1 + term2)
            } else {
                let num = (PI * t * (1.0 - alpha)).sin()
                    + 4.0 * alpha * t * (PI * t * (1.0 + alpha)).cos();
                let den = PI * t * (1.0 - (4.0 * alpha * t).powi(2));
                num / den
            }
        })
        .collect();

    Ok(coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rrc_filter_length() {
        let rrc = RootRaisedCosine::new(6, 4, 0.35).unwrap();
        // 2 * 6 * 4 + 1 = 49 taps
        assert_eq!(rrc.filter_len(), 49);
    }

    #[test]
    fn test_rrc_symmetry() {
        let rrc = RootRaisedCosine::new(6, 4, 0.35).unwrap();
        let coeffs = rrc.coefficients();
        let len = coeffs.len();

        for i in 0..len / 2 {
            assert!(
                (coeffs[i] - coeffs[len - 1 - i]).abs() < 1e-10,
                "Asymmetric at index {}: {} vs {}",
                i,
                coeffs[i],
                coeffs[len - 1 - i]
            );
        }
    }

    #[test]
    fn test_rrc_center_tap_is_max() {
        let rrc = RootRaisedCosine::new(9, 2, 0.35).unwrap();
        let coeffs = rrc.coefficients();
        let center = coeffs.len() / 2;

        for (i, &c) in coeffs.iter().enumerate() {
            assert!(
                coeffs[center] >= c,
                "Center tap {} at {} is not max, {} at {} is larger",
                coeffs[center],
                center,
                c,
                i
            );
        }
        assert!((coeffs[center] - (1.0 - 0.35 + 4.0 * 0.35 / PI)).abs() < 1e-12);
    }

    #[test]
    fn test_rrc_singularity_is_continuous() {
        // alpha = 0.25, sps = 2: t = ±1 lands exactly on the singularity (n = ±2)
        let taps = rrc_taps(4, 2, 0.25).unwrap();
        let center = taps.len() / 2;
        let at = taps[center + 2];
        assert!(at.is_finite());

        // Compare against the general formula just off the singular point
        let alpha = 0.25;
        let t: f64 = 1.0 + 1e-6;
        let near = ((PI * t * (1.0 - alpha)).sin()
            + 4.0 * alpha * t * (PI * t * (1.0 + alpha)).cos())
            / (PI * t * (1.0 - (4.0 * alpha * t).powi(2)));
        assert!((at - near).abs() < 1e-5, "{} vs {}", at, near);
        assert_eq!(taps[center + 2], taps[center - 2]);
    }

    #[test]
    fn test_rrc_all_finite_over_alpha_grid() {
        for k in 1..=20 {
            let alpha = k as f64 * 0.05;
            for sps in 1..=8 {
                let taps = rrc_taps(6, sps, alpha).unwrap();
                assert!(taps.iter().all(|t| t.is_finite()), "alpha={} sps={}", alpha, sps);
            }
        }
    }

    #[test]
    fn test_rrc_rejects_invalid_alpha() {
        assert!(rrc_taps(4, 2, 0.0).is_err());
        assert!(rrc_taps(4, 2, -0.2).is_err());
        assert!(rrc_taps(4, 2, 1.5).is_err());
        assert!(rrc_taps(4, 0, 0.35).is_err());
    }
}
