//! "Same-length" convolution
//!
//! Output has the length of the input signal and is the centered window of
//! the full linear convolution, starting at offset `(taps - 1) / 2`. Short
//! tap sets use direct summation; long ones switch to an FFT product.

use num_complex::Complex64;
use rustfft::FftPlanner;

/// Work (signal × taps) above which the FFT path is used
const FFT_THRESHOLD: usize = 1 << 16;

/// Minimum tap count for the FFT path
const FFT_MIN_TAPS: usize = 64;

/// Convolve a complex signal with real taps, keeping the input length
pub fn convolve_same(signal: &[Complex64], taps: &[f64]) -> Vec<Complex64> {
    if taps.len() >= FFT_MIN_TAPS && signal.len() * taps.len() >= FFT_THRESHOLD {
        convolve_same_fft(signal, taps)
    } else {
        convolve_same_direct(signal, taps)
    }
}

/// Direct O(n·m) evaluation
pub fn convolve_same_direct(signal: &[Complex64], taps: &[f64]) -> Vec<Complex64> {
    let n = signal.len();
    let m = taps.len();
    if m == 0 {
        return vec![Complex64::new(0.0, 0.0); n];
    }
    let offset = (m - 1) / 2;

    (0..n)
        .map(|o| {
            // Full-convolution index for this output sample
            let k = o + offset;
            let j_lo = (k + 1).saturating_sub(n);
            let j_hi = k.min(m - 1);
            let mut acc = Complex64::new(0.0, 0.0);
            for j in j_lo..=j_hi {
                acc += signal[k - j] * taps[j];
            }
            acc
        })
        .collect()
}

/// FFT evaluation; matches the direct form to floating-point tolerance
pub fn convolve_same_fft(signal: &[Complex64], taps: &[f64]) -> Vec<Complex64> {
    let n = signal.len();
    let m = taps.len();
    if n == 0 {
        return Vec::new();
    }
    if m == 0 {
        return vec![Complex64::new(0.0, 0.0); n];
    }
    let full_len = n + m - 1;
    let fft_size = full_len.next_power_of_two();

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(fft_size);
    let inverse = planner.plan_fft_inverse(fft_size);

    let mut a = vec![Complex64::new(0.0, 0.0); fft_size];
    a[..n].copy_from_slice(signal);
    let mut b = vec![Complex64::new(0.0, 0.0); fft_size];
    for (dst, &t) in b.iter_mut().zip(taps) {
        *dst = Complex64::new(t, 0.0);
    }

    forward.process(&mut a);
    forward.process(&mut b);
    for (x, y) in a.iter_mut().zip(&b) {
        *x *= *y;
    }
    inverse.process(&mut a);

    let scale = 1.0 / fft_size as f64;
    let offset = (m - 1) / 2;
    a[offset..offset + n].iter().map(|x| *x * scale).collect()
}
