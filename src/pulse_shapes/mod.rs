//! Filter designer
//!
//! FIR tap sets used by the generators: Root Raised Cosine for
//! constellation pulse shaping, Gaussian for GFSK/GMSK, and a
//! Blackman-windowed low-pass for sidelobe suppression and receiver
//! emulation. All designs validate their parameters instead of clamping.

mod gaussian;
mod lowpass;
mod rrc;
mod window;

pub use gaussian::{gaussian_taps, GaussianPulse};
pub use lowpass::{lowpass_taps, LowPass};
pub use rrc::{rrc_taps, RootRaisedCosine};
pub use window::{blackman, blackman_halves};

use crate::error::{SynthError, SynthResult};

/// Default roll-off factor when pulse shaping is not randomized
pub const DEFAULT_ALPHA: f64 = 0.35;

/// Stopband attenuation targeted by `filter_length_estimate`
pub const DEFAULT_ATTENUATION_DB: f64 = 72.0;

/// Gaussian pulse duration in symbols (each side of center)
pub const GAUSSIAN_SPAN: usize = 4;

/// Minimum odd tap count for a normalized transition width
///
/// harris' rule of thumb: N ≈ (fs / Δf) · (A_dB / 22), with fs = 1.
pub fn filter_length_estimate(transition_bandwidth: f64) -> SynthResult<usize> {
    filter_length_estimate_with(transition_bandwidth, DEFAULT_ATTENUATION_DB)
}

/// `filter_length_estimate` with an explicit stopband attenuation
pub fn filter_length_estimate_with(
    transition_bandwidth: f64,
    attenuation_db: f64,
) -> SynthResult<usize> {
    if !(transition_bandwidth > 0.0) || !transition_bandwidth.is_finite() {
        return Err(SynthError::invalid("transition_bandwidth", transition_bandwidth));
    }
    if !(attenuation_db > 0.0) {
        return Err(SynthError::invalid("attenuation_db", attenuation_db));
    }
    let length = ((1.0 / transition_bandwidth) * (attenuation_db / 22.0)).round() as usize;
    // Odd length keeps a center tap
    Ok(if length % 2 == 0 { length + 1 } else { length })
}
