//! Small DSP math helpers

use num_complex::Complex64;

/// `n` evenly spaced values from `start` to `stop` inclusive
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Mean of |x| over a set of points
#[inline]
pub fn mean_magnitude(points: &[Complex64]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.norm()).sum::<f64>() / points.len() as f64
}

/// Continuous-phase integration
///
/// Accumulates `gain · x[k]` and returns `exp(j·phase[k])`. Each output
/// sample has unit magnitude by construction.
pub fn integrate_phase(instantaneous: &[f64], gain: f64) -> Vec<Complex64> {
    let mut phase = 0.0;
    instantaneous
        .iter()
        .map(|&x| {
            phase += x * gain;
            Complex64::from_polar(1.0, phase)
        })
        .collect()
}
