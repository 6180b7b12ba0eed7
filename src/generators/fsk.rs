//! Continuous-phase FSK family (FSK / GFSK / MSK / GMSK)
//!
//! Each symbol selects a tone offset that is held for `order · oversampling`
//! samples, optionally smoothed by a Gaussian pulse, then integrated into
//! phase. The output has unit magnitude unless the detector low-pass is
//! enabled.

use std::f64::consts::PI;

use log::{debug, trace};
use num_complex::Complex64;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constellations::{tone_alphabet, ToneAlphabet};
use crate::descriptor::RequestedDescriptor;
use crate::error::{SynthError, SynthResult};
use crate::pulse_shapes::{GaussianPulse, LowPass};
use crate::rng::{uniform, with_seed};
use crate::traits::{Generator, PulseShape};
use crate::utils::integrate_phase;
use crate::waveform::Waveform;
use crate::work_order::{ModulationFamily, Sample, SynthesisParams, WorkOrder};

/// BT product used by Gaussian variants when no bandwidth was drawn
pub const DEFAULT_GAUSSIAN_BT: f64 = 0.35;

/// Upper bound on a drawn bandwidth, keeps the detector low-pass short
pub const MAX_DRAWN_BANDWIDTH: f64 = 0.45;

/// FSK dataset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FskConfig {
    pub modulations: Vec<String>,
    pub num_iq_samples: usize,
    pub num_samples_per_class: usize,
    /// Oversampling on top of the per-tone spacing
    pub iq_samples_per_symbol: usize,
    pub random_data: bool,
    pub random_pulse_shaping: bool,
}

impl Default for FskConfig {
    fn default() -> Self {
        Self {
            modulations: vec!["2fsk".into(), "2gmsk".into()],
            num_iq_samples: 100,
            num_samples_per_class: 100,
            iq_samples_per_symbol: 2,
            random_data: false,
            random_pulse_shaping: false,
        }
    }
}

impl FskConfig {
    pub fn with_modulations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modulations = names.into_iter().map(Into::into).collect();
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

/// FSK-family generator
#[derive(Debug, Clone)]
pub struct FskGenerator {
    config: FskConfig,
}

impl FskGenerator {
    pub fn new(mut config: FskConfig) -> SynthResult<Self> {
        if config.modulations.is_empty() {
            return Err(SynthError::EmptyConfiguration("modulations"));
        }
        if config.iq_samples_per_symbol == 0 {
            return Err(SynthError::invalid("iq_samples_per_symbol", 0.0));
        }
        if config.num_iq_samples == 0 {
            return Err(SynthError::invalid("num_iq_samples", 0.0));
        }
        for name in config.modulations.iter_mut() {
            *name = name.to_lowercase();
            tone_alphabet(name)?;
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &FskConfig {
        &self.config
    }

    /// Work orders for every configured modulation, class-major
    pub fn build_index<R: Rng + ?Sized>(&self, rng: &mut R) -> SynthResult<Vec<WorkOrder>> {
        self.build_index_for(&self.config.modulations, rng)
    }

    /// Work orders for a subset of the configured modulations
    ///
    /// Numbering restarts at zero for the subset, so separate subsets drawn
    /// from the same generator share seeds class-for-class.
    pub fn build_index_for<R: Rng + ?Sized>(
        &self,
        names: &[String],
        rng: &mut R,
    ) -> SynthResult<Vec<WorkOrder>> {
        let per_class = self.config.num_samples_per_class;
        let sps = self.config.iq_samples_per_symbol;
        let mut orders = Vec::with_capacity(names.len() * per_class);

        for (class_idx, name) in names.iter().enumerate() {
            let name = name.to_lowercase();
            let tones = tone_alphabet(&name)?;
            let kind = tones.kind();
            // Above a quarter of the sample rate the range collapses to its floor
            let lo = (kind.modulation_index() / sps as f64).min(MAX_DRAWN_BANDWIDTH);
            let hi = (0.5 - lo).clamp(lo, MAX_DRAWN_BANDWIDTH);

            for i in 0..per_class {
                let bandwidth = self
                    .config
                    .random_pulse_shaping
                    .then(|| uniform(rng, lo, hi));

                let descriptor = RequestedDescriptor::new(name.as_str())
                    .with_bits_per_symbol(tones.bits_per_symbol())
                    .with_samples_per_symbol(sps);
                // Gaussian variants settle their BT product at synthesis
                let descriptor = match bandwidth {
                    Some(bw) => descriptor.with_excess_bandwidth(bw),
                    None if kind.is_gaussian() => descriptor.with_unresolved_excess_bandwidth(),
                    None => descriptor.with_excess_bandwidth(0.0),
                };

                orders.push(WorkOrder::new(
                    name.as_str(),
                    (class_idx * per_class + i) as u64,
                    SynthesisParams::Fsk { bandwidth },
                    descriptor,
                ));
            }
        }
        Ok(orders)
    }

    fn modulate(
        &self,
        tones: &ToneAlphabet,
        bt: Option<f64>,
        detector_cutoff: Option<f64>,
        seed: u64,
    ) -> SynthResult<Waveform> {
        let n = self.config.num_iq_samples;
        let oversampling = self.config.iq_samples_per_symbol;
        let sps = tones.order() * oversampling;
        let kind = tones.kind();

        // Filters first, so bad parameters fail before any draws
        let gaussian = bt.map(|bt| GaussianPulse::new(sps, bt)).transpose()?;
        let detector = detector_cutoff
            .map(|bw| LowPass::new(bw, (0.5 - bw) / 4.0))
            .transpose()?;

        let num_symbols = n.div_ceil(sps);
        let mut freqs = Vec::with_capacity(num_symbols * sps + 1);
        // Phase starts at zero
        freqs.push(0.0);
        with_seed(seed, self.config.random_data, |rng| {
            for _ in 0..num_symbols {
                let tone = tones.tones()[rng.gen_range(0..tones.order())] / oversampling as f64;
                freqs.extend(std::iter::repeat(tone).take(sps));
            }
        });

        if let Some(pulse) = gaussian {
            trace!("{}: gaussian bt {:.3}, {} taps", tones.name(), pulse.bt(), pulse.filter_len());
            let held: Vec<Complex64> = freqs[1..].iter().map(|&f| Complex64::new(f, 0.0)).collect();
            for (dst, src) in freqs[1..].iter_mut().zip(pulse.apply(&held)) {
                *dst = src.re;
            }
        }

        let mut modulated = integrate_phase(&freqs, kind.modulation_index() * PI);
        if let Some(lpf) = detector {
            trace!(
                "{}: detector low-pass at {:.3}, {} taps",
                tones.name(),
                lpf.cutoff(),
                lpf.filter_len()
            );
            modulated = lpf.apply(&modulated);
        }
        Waveform::from_tail(&modulated, n)
    }
}

impl Generator for FskGenerator {
    fn family(&self) -> ModulationFamily {
        ModulationFamily::Fsk
    }

    fn num_iq_samples(&self) -> usize {
        self.config.num_iq_samples
    }

    fn synthesize(&self, order: &WorkOrder) -> SynthResult<Sample> {
        let SynthesisParams::Fsk { bandwidth } = order.params else {
            return Err(SynthError::FamilyMismatch {
                expected: ModulationFamily::Fsk.name(),
                found: order.family().name(),
            });
        };
        let tones = tone_alphabet(&order.class_name)?;
        let gaussian = tones.kind().is_gaussian();

        let bt = gaussian.then(|| bandwidth.unwrap_or(DEFAULT_GAUSSIAN_BT));
        let detector_cutoff = if self.config.random_pulse_shaping { bandwidth } else { None };

        let waveform = self.modulate(tones, bt, detector_cutoff, order.index)?;
        debug!(
            "{} #{}: {} samples, bt {:?}, detector {:?}",
            order.class_name,
            order.index,
            waveform.len(),
            bt,
            detector_cutoff
        );
        Ok((waveform, order.descriptor.resolve(bt)))
    }
}
