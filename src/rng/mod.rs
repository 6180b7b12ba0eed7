//! Reproducible randomness
//!
//! Every generator draws from a `ChaCha8Rng` handed to it by `with_seed`.
//! Seeded calls use a private generator built from the work-order index, so
//! they are reproducible and never touch the ambient stream. Unseeded calls
//! draw from a per-thread ambient generator.

mod draw;
mod noise;
mod scope;

pub use draw::{randint, uniform};
pub use noise::NoiseGenerator;
pub use scope::{ambient_snapshot, reseed_ambient, with_seed};

/// Generator used throughout the crate
pub type SynthRng = rand_chacha::ChaCha8Rng;
