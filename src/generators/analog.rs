//! Analog modulations: AM (with carrier, DSB, SSB) and FM
//!
//! The message is band-limited Gaussian noise. AM variants filter it and,
//! for SSB, shift the passband up; FM integrates it into phase.

use std::f64::consts::FRAC_PI_4;
use std::fmt;

use log::debug;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::carriers::{Nco, SSB_SHIFT};
use crate::descriptor::RequestedDescriptor;
use crate::error::{SynthError, SynthResult};
use crate::pulse_shapes::LowPass;
use crate::rng::{with_seed, NoiseGenerator};
use crate::traits::{Generator, PulseShape};
use crate::utils::integrate_phase;
use crate::waveform::Waveform;
use crate::work_order::{ModulationFamily, Sample, SynthesisParams, WorkOrder};

/// DC offset added to the message for AM with carrier
pub const AM_CARRIER_OFFSET: f64 = 5.0;

/// Phase gain applied to the FM message
pub const FM_GAIN: f64 = FRAC_PI_4;

const WIDE_CUTOFF: f64 = 0.25;
const WIDE_TRANSITION: f64 = 0.25 / 16.0;
const SSB_CUTOFF: f64 = 0.125;
const SSB_TRANSITION: f64 = 0.125 / 4.0;

/// AM flavor, identified by its class name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmVariant {
    #[serde(rename = "am")]
    Am,
    #[serde(rename = "am-ssb")]
    AmSsb,
    #[serde(rename = "am-dsb")]
    AmDsb,
}

impl AmVariant {
    pub const ALL: [AmVariant; 3] = [AmVariant::Am, AmVariant::AmSsb, AmVariant::AmDsb];

    pub fn class_name(&self) -> &'static str {
        match self {
            AmVariant::Am => "am",
            AmVariant::AmSsb => "am-ssb",
            AmVariant::AmDsb => "am-dsb",
        }
    }

    /// Message low-pass (cutoff, transition width) in cycles per sample
    fn message_filter(&self) -> (f64, f64) {
        match self {
            AmVariant::AmSsb => (SSB_CUTOFF, SSB_TRANSITION),
            AmVariant::Am | AmVariant::AmDsb => (WIDE_CUTOFF, WIDE_TRANSITION),
        }
    }
}

impl fmt::Display for AmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Analog dataset configuration, shared by the AM and FM generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalogConfig {
    pub num_iq_samples: usize,
    pub num_samples_per_class: usize,
    pub random_data: bool,
}

impl Default for AnalogConfig {
    fn default() -> Self {
        Self {
            num_iq_samples: 100,
            num_samples_per_class: 100,
            random_data: false,
        }
    }
}

impl AnalogConfig {
    pub fn with_num_iq_samples(mut self, n: usize) -> Self {
        self.num_iq_samples = n;
        self
    }

    pub fn with_num_samples_per_class(mut self, n: usize) -> Self {
        self.num_samples_per_class = n;
        self
    }

    pub fn with_random_data(mut self, random_data: bool) -> Self {
        self.random_data = random_data;
        self
    }

    fn validate(&self) -> SynthResult<()> {
        if self.num_iq_samples == 0 {
            return Err(SynthError::invalid("num_iq_samples", 0.0));
        }
        Ok(())
    }
}

/// Real Gaussian message, lifted to complex with zero imaginary part
fn gaussian_message(n: usize, seed: u64, random_data: bool) -> Vec<Complex64> {
    with_seed(seed, random_data, |rng| {
        let mut noise = NoiseGenerator::standard();
        noise
            .samples(rng, n)
            .into_iter()
            .map(|x| Complex64::new(x, 0.0))
            .collect()
    })
}

/// AM family generator
#[derive(Debug, Clone)]
pub struct AmGenerator {
    config: AnalogConfig,
}

impl AmGenerator {
    pub fn new(config: AnalogConfig) -> SynthResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Classes `am`, `am-ssb`, `am-dsb`, class-major
    pub fn build_index(&self) -> Vec<WorkOrder> {
        let per_class = self.config.num_samples_per_class;
        AmVariant::ALL
            .iter()
            .enumerate()
            .flat_map(|(class_idx, &variant)| {
                (0..per_class).map(move |i| {
                    WorkOrder::new(
                        variant.class_name(),
                        (class_idx * per_class + i) as u64,
                        SynthesisParams::Am(variant),
                        RequestedDescriptor::new(variant.class_name()),
                    )
                })
            })
            .collect()
    }
}

impl Generator for AmGenerator {
    fn family(&self) -> ModulationFamily {
        ModulationFamily::Am
    }

    fn num_iq_samples(&self) -> usize {
        self.config.num_iq_samples
    }

    fn synthesize(&self, order: &WorkOrder) -> SynthResult<Sample> {
        let SynthesisParams::Am(variant) = order.params else {
            return Err(SynthError::FamilyMismatch {
                expected: ModulationFamily::Am.name(),
                found: order.family().name(),
            });
        };
        let n = self.config.num_iq_samples;
        let (cutoff, transition) = variant.message_filter();
        let lpf = LowPass::new(cutoff, transition)?;

        let message = gaussian_message(n, order.index, self.config.random_data);
        let mut modulated = lpf.apply(&message);
        match variant {
            AmVariant::AmSsb => Nco::new(SSB_SHIFT).mix(&mut modulated),
            AmVariant::Am => modulated.iter_mut().for_each(|s| s.re += AM_CARRIER_OFFSET),
            AmVariant::AmDsb => {}
        }

        debug!("{} #{}: {} taps", variant, order.index, lpf.filter_len());
        Ok((Waveform::new(modulated), order.descriptor.resolve(None)))
    }
}

/// FM generator
#[derive(Debug, Clone)]
pub struct FmGenerator {
    config: AnalogConfig,
}

impl FmGenerator {
    pub fn new(config: AnalogConfig) -> SynthResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Single class `fm`
    pub fn build_index(&self) -> Vec<WorkOrder> {
        (0..self.config.num_samples_per_class)
            .map(|i| {
                WorkOrder::new(
                    "fm",
                    i as u64,
                    SynthesisParams::Fm,
                    RequestedDescriptor::new("fm"),
                )
            })
            .collect()
    }
}

impl Generator for FmGenerator {
    fn family(&self) -> ModulationFamily {
        ModulationFamily::Fm
    }

    fn num_iq_samples(&self) -> usize {
        self.config.num_iq_samples
    }

    fn synthesize(&self, order: &WorkOrder) -> SynthResult<Sample> {
        if !matches!(order.params, SynthesisParams::Fm) {
            return Err(SynthError::FamilyMismatch {
                expected: ModulationFamily::Fm.name(),
                found: order.family().name(),
            });
        }
        let n = self.config.num_iq_samples;
        let lpf = LowPass::new(WIDE_CUTOFF, WIDE_TRANSITION)?;

        let message = gaussian_message(n, order.index, self.config.random_data);
        let filtered: Vec<f64> = lpf.apply(&message).iter().map(|s| s.re).collect();
        let modulated = integrate_phase(&filtered, FM_GAIN);

        debug!("fm #{}: {} samples", order.index, modulated.len());
        Ok((Waveform::new(modulated), order.descriptor.resolve(None)))
    }
}
