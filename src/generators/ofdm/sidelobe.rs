//! Sidelobe suppression: serialize cyclic-prefixed symbols into one stream

use num_complex::Complex64;
use rand::Rng;

use super::SidelobeSuppression;
use crate::error::{SynthError, SynthResult};
use crate::pulse_shapes::{blackman_halves, filter_length_estimate, lowpass_taps};
use crate::rng::uniform;
use crate::utils::convolve_same;

/// Fixed low-pass design for `Lpf`
pub const LPF_CUTOFF: f64 = 0.3;
/// Samples dropped from the end of the `Lpf` stream
pub const LPF_TRIM: usize = 50;
/// Cutoff range for `RandLpf`
pub const RAND_LPF_CUTOFF: (f64, f64) = (0.25, 0.475);

/// Transition width paired with a low-pass cutoff
pub fn lpf_transition(cutoff: f64) -> f64 {
    (0.5 - cutoff) / 4.0
}

/// Taps for the fixed `Lpf` method
pub fn fixed_lpf_taps() -> SynthResult<Vec<f64>> {
    lowpass_taps(LPF_CUTOFF, lpf_transition(LPF_CUTOFF))
}

/// Upper bound on the samples a method removes from the serialized stream
pub fn max_trim(method: SidelobeSuppression) -> SynthResult<usize> {
    Ok(match method {
        SidelobeSuppression::Lpf => LPF_TRIM,
        SidelobeSuppression::RandLpf => {
            filter_length_estimate(lpf_transition(RAND_LPF_CUTOFF.1))?
        }
        _ => 0,
    })
}

/// Serialize `symbols` (each `cp_len + fft_size` long) with `method` applied
pub fn serialize<R: Rng + ?Sized>(
    symbols: &[Vec<Complex64>],
    method: SidelobeSuppression,
    fft_size: usize,
    cp_len: usize,
    fixed_taps: &[f64],
    rng: &mut R,
) -> SynthResult<Vec<Complex64>> {
    let flattened = || symbols.iter().flatten().copied().collect::<Vec<_>>();

    match method {
        SidelobeSuppression::None => Ok(flattened()),
        SidelobeSuppression::Lpf => {
            let mut out = convolve_same(&flattened(), fixed_taps);
            out.truncate(out.len().saturating_sub(LPF_TRIM));
            Ok(out)
        }
        SidelobeSuppression::RandLpf => {
            let cutoff = uniform(rng, RAND_LPF_CUTOFF.0, RAND_LPF_CUTOFF.1);
            let taps = lowpass_taps(cutoff, lpf_transition(cutoff))?;
            let mut out = convolve_same(&flattened(), &taps);
            out.truncate(out.len().saturating_sub(taps.len()));
            Ok(out)
        }
        SidelobeSuppression::WinStart | SidelobeSuppression::WinCenter => {
            overlap_add(symbols, method, fft_size, cp_len)
        }
    }
}

/// Window each symbol's extended edges and overlap-add them at the symbol rate
fn overlap_add(
    symbols: &[Vec<Complex64>],
    method: SidelobeSuppression,
    fft_size: usize,
    cp_len: usize,
) -> SynthResult<Vec<Complex64>> {
    let window_len = cp_len;
    if window_len == 0 {
        return Err(SynthError::invalid("cyclic_prefix_len", 0.0));
    }
    let half = window_len / 2;
    let symbol_len = cp_len + fft_size;
    let (rise, fall) = blackman_halves(window_len);

    let extended: Vec<Vec<Complex64>> = symbols
        .iter()
        .map(|symbol| {
            let zero = Complex64::new(0.0, 0.0);
            let mut ext = match method {
                SidelobeSuppression::WinCenter => {
                    let mut ext = vec![zero; symbol_len + 2 * half];
                    ext[half..half + symbol_len].copy_from_slice(symbol);
                    let len = ext.len();
                    let tail_src = half + cp_len;
                    ext.copy_within(tail_src..tail_src + half, len - half);
                    let head_src = half + cp_len + fft_size;
                    ext.copy_within(head_src..head_src + half, 0);
                    ext
                }
                _ => {
                    let mut ext = vec![zero; symbol_len + window_len];
                    ext[..symbol_len].copy_from_slice(symbol);
                    let len = ext.len();
                    ext.copy_within(cp_len..cp_len + window_len, len - window_len);
                    ext
                }
            };

            let len = ext.len();
            for (s, w) in ext[..window_len].iter_mut().zip(&rise) {
                *s = *s * *w;
            }
            for (s, w) in ext[len - window_len..].iter_mut().zip(&fall) {
                *s = *s * *w;
            }
            ext
        })
        .collect();

    let ext_len = extended.first().map_or(0, Vec::len);
    let mut combined = vec![Complex64::new(0.0, 0.0); ext_len * extended.len()];
    let stride = fft_size + window_len;
    for (i, ext) in extended.iter().enumerate() {
        let start = i * stride;
        for (dst, src) in combined[start..start + ext_len].iter_mut().zip(ext) {
            *dst += *src;
        }
    }
    combined.truncate(symbol_len * symbols.len());
    Ok(combined)
}
