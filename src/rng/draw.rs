//! Uniform draw helpers with half-open bounds
//!
//! `uniform` tolerates reversed bounds (it interpolates), and `randint`
//! collapses an empty range to its lower bound instead of panicking.

use rand::Rng;

/// Uniform value between `lo` and `hi`
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.gen::<f64>()
}

/// Integer in `[lo, hi)`, or `lo` when the range is empty
pub fn randint<R: Rng + ?Sized>(rng: &mut R, lo: usize, hi: usize) -> usize {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..hi)
    }
}
