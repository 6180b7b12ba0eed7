//! PulseShape trait - FIR tap set access
//!
//! Every filter designed in `pulse_shapes` exposes its taps through this
//! trait so the generators can apply any of them with the same
//! "same-length" convolution.

use num_complex::Complex64;

use crate::utils::convolve_same;

/// FIR tap set trait
pub trait PulseShape: Send + Sync {
    /// Get the filter coefficients
    fn coefficients(&self) -> &[f64];

    /// Length of the filter in taps
    fn filter_len(&self) -> usize {
        self.coefficients().len()
    }

    /// Filter a complex sequence, output length equals input length
    fn apply(&self, signal: &[Complex64]) -> Vec<Complex64> {
        convolve_same(signal, self.coefficients())
    }
}
