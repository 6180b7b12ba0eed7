//! Constellation-based (PSK / QAM / PAM / OOK) generator
//!
//! Symbols are drawn from a normalized alphabet, zero-stuffed to the
//! requested oversampling and shaped with a root-raised-cosine filter.

use std::sync::Arc;

use log::{debug, trace};
use num_complex::Complex64;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constellations::{Alphabet, ConstellationCatalog};
use crate::descriptor::RequestedDescriptor;
use crate::error::{SynthError, SynthResult};
use crate::pulse_shapes::{filter_length_estimate, RootRaisedCosine, DEFAULT_ALPHA};
use crate::rng::{uniform, with_seed};
use crate::traits::{Constellation, Generator, PulseShape};
use crate::waveform::Waveform;
use crate::work_order::{ModulationFamily, Sample, SynthesisParams, WorkOrder};

/// Range of the randomized RRC roll-off
pub const RANDOM_ALPHA_RANGE: (f64, f64) = (0.15, 0.6);

/// Constellation dataset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationConfig {
    pub constellations: Vec<String>,
    pub num_iq_samples: usize,
    pub num_samples_per_class: usize,
    pub iq_samples_per_symbol: usize,
    pub random_data: bool,
    pub random_pulse_shaping: bool,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            constellations: vec!["bpsk".into(), "qpsk".into()],
            num_iq_samples: 100,
            num_samples_per_class: 100,
            iq_samples_per_symbol: 2,
            random_data: false,
            random_pulse_shaping: false,
        }
    }
}

impl ConstellationConfig {
    pub fn with_constellations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constellations = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_num_iq_samples(mut self, n: usize) -> Self {
        self.num_iq_samples = n;
        self
    }

    pub fn with_num_samples_per_class(mut self, n: usize) -> Self {
        self.num_samples_per_class = n;
        self
    }

    pub fn with_iq_samples_per_symbol(mut self, sps: usize) -> Self {
        self.iq_samples_per_symbol = sps;
        self
    }

    pub fn with_random_data(mut self, random_data: bool) -> Self {
        self.random_data = random_data;
        self
    }

    pub fn with_random_pulse_shaping(mut self, random: bool) -> Self {
        self.random_pulse_shaping = random;
        self
    }
}

/// RRC-shaped constellation generator
#[derive(Debug, Clone)]
pub struct ConstellationGenerator {
    config: ConstellationConfig,
    catalog: Arc<ConstellationCatalog>,
}

impl ConstellationGenerator {
    /// Generator over the built-in catalog
    pub fn new(config: ConstellationConfig) -> SynthResult<Self> {
        let catalog = Arc::new(ConstellationCatalog::default_catalog()?.clone());
        Self::with_catalog(config, catalog)
    }

    /// Generator over a caller-supplied catalog
    pub fn with_catalog(
        mut config: ConstellationConfig,
        catalog: Arc<ConstellationCatalog>,
    ) -> SynthResult<Self> {
        if config.constellations.is_empty() {
            return Err(SynthError::EmptyConfiguration("constellations"));
        }
        if config.iq_samples_per_symbol == 0 {
            return Err(SynthError::invalid("iq_samples_per_symbol", 0.0));
        }
        if config.num_iq_samples == 0 {
            return Err(SynthError::invalid("num_iq_samples", 0.0));
        }
        for name in config.constellations.iter_mut() {
            *name = name.to_lowercase();
            if !catalog.contains(name) {
                return Err(SynthError::UnknownModulation(name.clone()));
            }
        }
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &ConstellationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ConstellationCatalog {
        &self.catalog
    }

    /// One work order per (class, sample) pair, class-major
    ///
    /// The roll-off is drawn here when `random_pulse_shaping` is set, so a
    /// given order always synthesizes with the same filter.
    pub fn build_index<R: Rng + ?Sized>(&self, rng: &mut R) -> SynthResult<Vec<WorkOrder>> {
        let per_class = self.config.num_samples_per_class;
        let mut orders = Vec::with_capacity(self.config.constellations.len() * per_class);

        for (class_idx, name) in self.config.constellations.iter().enumerate() {
            let alphabet = self.catalog.get(name)?;
            for i in 0..per_class {
                let alpha = if self.config.random_pulse_shaping {
                    uniform(rng, RANDOM_ALPHA_RANGE.0, RANDOM_ALPHA_RANGE.1)
                } else {
                    DEFAULT_ALPHA
                };
                let descriptor = RequestedDescriptor::new(name.as_str())
                    .with_bits_per_symbol(alphabet.bits_per_symbol())
                    .with_samples_per_symbol(self.config.iq_samples_per_symbol)
                    .with_excess_bandwidth(alpha);
                orders.push(WorkOrder::new(
                    name.as_str(),
                    (class_idx * per_class + i) as u64,
                    SynthesisParams::Constellation { excess_bandwidth: alpha },
                    descriptor,
                ));
            }
        }
        Ok(orders)
    }

    fn shape(&self, alphabet: &Alphabet, alpha: f64, seed: u64) -> SynthResult<Waveform> {
        let sps = self.config.iq_samples_per_symbol;
        let n = self.config.num_iq_samples;

        let filter_len = filter_length_estimate(alpha / sps as f64)?;
        let rrc = RootRaisedCosine::new((filter_len - 1) / 2, sps, alpha)?;
        trace!(
            "{}: rrc alpha {:.3}, span {} symbols, {} taps",
            alphabet.name(),
            rrc.alpha(),
            rrc.span_symbols(),
            rrc.filter_len()
        );

        // Enough symbols to cover n samples after the zero-stuffing
        let num_symbols = n.div_ceil(sps);
        let mut stuffed = vec![Complex64::new(0.0, 0.0); num_symbols * sps];
        with_seed(seed, self.config.random_data, |rng| {
            for k in 0..num_symbols {
                stuffed[k * sps] = alphabet.point(rng.gen_range(0..alphabet.order()));
            }
        });

        let filtered = rrc.apply(&stuffed);
        Waveform::from_tail(&filtered, n)
    }
}

impl Generator for ConstellationGenerator {
    fn family(&self) -> ModulationFamily {
        ModulationFamily::Constellation
    }

    fn num_iq_samples(&self) -> usize {
        self.config.num_iq_samples
    }

    fn synthesize(&self, order: &WorkOrder) -> SynthResult<Sample> {
        let SynthesisParams::Constellation { excess_bandwidth } = order.params else {
            return Err(SynthError::FamilyMismatch {
                expected: ModulationFamily::Constellation.name(),
                found: order.family().name(),
            });
        };
        if !(excess_bandwidth > 0.0 && excess_bandwidth <= 1.0) {
            return Err(SynthError::invalid("excess_bandwidth", excess_bandwidth));
        }

        let alphabet = self.catalog.get(&order.class_name)?;
        let waveform = self.shape(alphabet, excess_bandwidth, order.index)?;
        debug!(
            "{} #{}: {} samples, alpha {:.3}",
            order.class_name,
            order.index,
            waveform.len(),
            excess_bandwidth
        );
        Ok((waveform, order.descriptor.resolve(Some(excess_bandwidth))))
    }
}
