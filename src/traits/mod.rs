//! Core traits for the synthesis engine
//!
//! Each trait is one seam: alphabets, tap sets, per-family generators, and
//! the external storage/transform collaborators consumed by callers.

mod constellation;
mod pulse_shape;
mod generator;
mod store;

pub use constellation::Constellation;
pub use pulse_shape::PulseShape;
pub use generator::Generator;
pub use store::{SampleStore, Transform};
