//! Blackman window

use std::f64::consts::PI;

/// Symmetric Blackman window of `len` points
pub fn blackman(len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let denom = (len - 1) as f64;
            (0..len)
                .map(|i| {
                    let x = i as f64 / denom;
                    0.42 - 0.5 * (2.0 * PI * x).cos() + 0.08 * (4.0 * PI * x).cos()
                })
                .collect()
        }
    }
}

/// Rising and falling halves of a `2·half_len` Blackman window
pub fn blackman_halves(half_len: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rise = blackman(2 * half_len);
    let fall = rise.split_off(half_len);
    (rise, fall)
}
