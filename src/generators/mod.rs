//! Per-family waveform generators
//!
//! Each generator owns its configuration, builds the work-order index for
//! its classes and synthesizes single orders. `GeneratorTable` routes
//! orders by family.

mod analog;
mod constellation;
mod fsk;
pub mod ofdm;
mod table;


pub use analog::{AmGenerator, AmVariant, AnalogConfig, FmGenerator, AM_CARRIER_OFFSET, FM_GAIN};
pub use constellation::{ConstellationConfig, ConstellationGenerator, RANDOM_ALPHA_RANGE};
pub use fsk::{FskConfig, FskGenerator, DEFAULT_GAUSSIAN_BT};
pub use ofdm::{
    DcSubcarrier, OfdmConfig, OfdmGenerator, OfdmParams, SidelobeSuppression,
    SubcarrierModulation, TimeVaryingRealism,
};
pub use table::GeneratorTable;
