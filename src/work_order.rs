//! Work orders: one fully-resolved synthesis request per dataset entry

use std::fmt;

use crate::descriptor::{RequestedDescriptor, SignalDescriptor};
use crate::generators::{AmVariant, OfdmParams};
use crate::waveform::Waveform;

/// A synthesized waveform with its resolved descriptor
pub type Sample = (Waveform, SignalDescriptor);

/// Modulation family, used to route work orders to generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulationFamily {
    Constellation,
    Fsk,
    Ofdm,
    Am,
    Fm,
}

impl ModulationFamily {
    pub fn name(&self) -> &'static str {
        match self {
            ModulationFamily::Constellation => "constellation",
            ModulationFamily::Fsk => "fsk",
            ModulationFamily::Ofdm => "ofdm",
            ModulationFamily::Am => "am",
            ModulationFamily::Fm => "fm",
        }
    }
}

impl fmt::Display for ModulationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-family synthesis parameters, resolved at index-construction time
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisParams {
    /// RRC roll-off for the pulse-shaping filter
    Constellation { excess_bandwidth: f64 },
    /// Gaussian BT product / detector cutoff; `None` when not randomized
    Fsk { bandwidth: Option<f64> },
    Ofdm(OfdmParams),
    Am(AmVariant),
    Fm,
}

impl SynthesisParams {
    pub fn family(&self) -> ModulationFamily {
        match self {
            SynthesisParams::Constellation { .. } => ModulationFamily::Constellation,
            SynthesisParams::Fsk { .. } => ModulationFamily::Fsk,
            SynthesisParams::Ofdm(_) => ModulationFamily::Ofdm,
            SynthesisParams::Am(_) => ModulationFamily::Am,
            SynthesisParams::Fm => ModulationFamily::Fm,
        }
    }
}

/// One entry of a dataset index
///
/// `index` doubles as the RNG seed when reproducible generation is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrder {
    pub class_name: String,
    pub index: u64,
    pub params: SynthesisParams,
    pub descriptor: RequestedDescriptor,
}

impl WorkOrder {
    pub fn new(
        class_name: impl Into<String>,
        index: u64,
        params: SynthesisParams,
        descriptor: RequestedDescriptor,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            index,
            params,
            descriptor,
        }
    }

    pub fn family(&self) -> ModulationFamily {
        self.params.family()
    }
}
