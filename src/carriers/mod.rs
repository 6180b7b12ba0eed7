//! Carrier oscillator implementations
//!
//! Currently only a complex NCO, used for SSB up-conversion.

mod nco;

pub use nco::Nco;

/// Frequency shift applied to single-sideband AM, in cycles per sample
pub const SSB_SHIFT: f64 = 0.125;
