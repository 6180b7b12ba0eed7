//! RF Synth - Synthetic baseband waveform engine for modulation classification
//!
//! Produces fixed-length complex I/Q waveforms, reproducible from an integer
//! index, for constellation (PSK/QAM/PAM/ASK/OOK), FSK-family, OFDM and
//! analog (AM/FM) classes. Dataset storage and the post-synthesis transform
//! are plugged in through the `SampleStore` and `Transform` traits.

pub mod traits;
pub mod constellations;
pub mod pulse_shapes;
pub mod carriers;
pub mod rng;
pub mod generators;
pub mod dataset;
pub mod descriptor;
pub mod error;
pub mod waveform;
pub mod work_order;
mod utils;

// Re-export core types for convenience
pub use traits::{Constellation, PulseShape, Generator, SampleStore, Transform};
pub use constellations::{Alphabet, ConstellationCatalog, FskKind, ToneAlphabet};
pub use pulse_shapes::{filter_length_estimate, gaussian_taps, lowpass_taps, rrc_taps};
pub use rng::with_seed;
pub use generators::{
    AmGenerator, AmVariant, AnalogConfig, ConstellationConfig, ConstellationGenerator,
    DcSubcarrier, FmGenerator, FskConfig, FskGenerator, GeneratorTable, OfdmConfig,
    OfdmGenerator, OfdmParams, SidelobeSuppression, SubcarrierModulation, TimeVaryingRealism,
};
pub use dataset::{DigitalModulationConfig, Identity, SyntheticDataset};
pub use descriptor::{RequestedDescriptor, SignalDescriptor};
pub use error::{SynthError, SynthResult};
pub use waveform::Waveform;
pub use work_order::{ModulationFamily, Sample, SynthesisParams, WorkOrder};
