//! Utility functions for DSP operations

mod convolve;
mod math;

pub use convolve::convolve_same;
pub use math::*;
