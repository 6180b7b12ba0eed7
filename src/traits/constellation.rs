//! Constellation trait - symbol index → complex point

use num_complex::Complex64;

/// Symbol alphabet trait
///
/// Implementations hold the geometry of a constellation diagram. Points are
/// expected to be normalized by the caller's convention (unit mean magnitude
/// for catalog alphabets).
pub trait Constellation: Send + Sync {
    /// Number of points in the alphabet (2 for BPSK, 4 for QPSK, etc.)
    fn order(&self) -> usize;

    /// Bits per symbol, log2 of the order. Fractional for non power-of-two
    /// alphabets such as 32qam_cross.
    fn bits_per_symbol(&self) -> f64 {
        (self.order() as f64).log2()
    }

    /// Map a symbol index (0 to order-1) to its complex point
    ///
    /// Panics when `sym >= order()`.
    fn point(&self, sym: usize) -> Complex64;
}
