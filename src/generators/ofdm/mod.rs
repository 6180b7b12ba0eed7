//! OFDM generator
//!
//! Pipeline per work order:
//! 1. map symbols onto a `2N × k` grid (N active subcarriers, N/2 guard
//!    rows each side)
//! 2. optionally zero the DC row
//! 3. optionally overlay on/off bursts, pilots and resource blocks
//! 4. `ifftshift` + IFFT each column, prepend the cyclic prefix
//! 5. serialize with the chosen sidelobe suppression
//! 6. cut `num_iq_samples` from a randomized start

pub mod grid;
pub mod realism;
pub mod sidelobe;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constellations::{Alphabet, ConstellationCatalog};
use crate::descriptor::RequestedDescriptor;
use crate::error::{SynthError, SynthResult};
use crate::rng::{randint, with_seed};
use crate::traits::Generator;
use crate::waveform::Waveform;
use crate::work_order::{ModulationFamily, Sample, SynthesisParams, WorkOrder};

use self::grid::{fixed_alphabet_grid, mixed_alphabet_grid, SymbolModulator};
use self::realism::BurstPattern;

/// Smallest supported subcarrier count
pub const MIN_SUBCARRIERS: usize = 8;

/// Symbol-index range for mixed-alphabet draws, reduced modulo each order
const MIXED_SYMBOL_RANGE: usize = 1024;

/// Fraction of the output allowed before the first burst boundary
const BURST_LEAD_FRACTION: f64 = 0.7;

macro_rules! tag_enum {
    ($name:ident, $err:ident, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl FromStr for $name {
            type Err = SynthError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(SynthError::$err(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// How the serialized symbol stream is shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidelobeSuppression {
    None,
    Lpf,
    RandLpf,
    WinStart,
    WinCenter,
}

tag_enum!(SidelobeSuppression, UnknownSidelobeSuppression, {
    None => "none",
    Lpf => "lpf",
    RandLpf => "rand_lpf",
    WinStart => "win_start",
    WinCenter => "win_center",
});

impl SidelobeSuppression {
    pub fn is_windowed(&self) -> bool {
        matches!(self, SidelobeSuppression::WinStart | SidelobeSuppression::WinCenter)
    }
}

/// Burst overlay policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeVaryingRealism {
    Off,
    FullBursty,
    PartialBursty,
}

tag_enum!(TimeVaryingRealism, UnknownTimeVaryingRealism, {
    Off => "off",
    FullBursty => "full_bursty",
    PartialBursty => "partial_bursty",
});

impl TimeVaryingRealism {
    /// Expand a tag list; `on` stands for both bursty policies
    pub fn expand_tags<S: AsRef<str>>(tags: &[S]) -> SynthResult<Vec<Self>> {
        let mut out = Vec::new();
        for tag in tags {
            let expanded = match tag.as_ref() {
                "on" => vec![TimeVaryingRealism::FullBursty, TimeVaryingRealism::PartialBursty],
                other => vec![other.parse::<Self>()?],
            };
            for policy in expanded {
                if !out.contains(&policy) {
                    out.push(policy);
                }
            }
        }
        out.sort_by_key(|p| Self::ALL.iter().position(|a| a == p));
        Ok(out)
    }
}

/// Alphabet assignment across subcarriers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubcarrierModulation {
    /// One alphabet for every subcarrier
    Fixed,
    /// Each subcarrier picks its own alphabet
    Random,
}

tag_enum!(SubcarrierModulation, UnknownSubcarrierModulation, {
    Fixed => "fixed",
    Random => "random",
});

/// Whether the DC subcarrier carries data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DcSubcarrier {
    On,
    Off,
}

tag_enum!(DcSubcarrier, UnknownDcSubcarrier, {
    On => "on",
    Off => "off",
});

/// OFDM dataset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfdmConfig {
    pub constellations: Vec<String>,
    pub num_subcarriers: Vec<usize>,
    pub cyclic_prefix_ratios: Vec<f64>,
    pub num_iq_samples: usize,
    pub num_samples_per_class: usize,
    pub random_data: bool,
    pub sidelobe_suppression_methods: Vec<SidelobeSuppression>,
    pub dc_subcarrier: Vec<DcSubcarrier>,
    pub time_varying_realism: Vec<TimeVaryingRealism>,
}

impl Default for OfdmConfig {
    fn default() -> Self {
        Self {
            constellations: vec!["bpsk".into(), "qpsk".into()],
            num_subcarriers: vec![64, 128, 256, 512, 1024, 2048],
            cyclic_prefix_ratios: vec![0.125, 0.25],
            num_iq_samples: 100,
            num_samples_per_class: 100,
            random_data: false,
            sidelobe_suppression_methods: SidelobeSuppression::ALL.to_vec(),
            dc_subcarrier: vec![DcSubcarrier::On, DcSubcarrier::Off],
            time_varying_realism: vec![TimeVaryingRealism::Off],
        }
    }
}

impl OfdmConfig {
    pub fn with_constellations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constellations = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_num_subcarriers(mut self, counts: Vec<usize>) -> Self {
        self.num_subcarriers = counts;
        self
    }

    pub fn with_cyclic_prefix_ratios(mut self, ratios: Vec<f64>) -> Self {
        self.cyclic_prefix_ratios = ratios;
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

    pub fn with_random_data(mut self, random_data: bool) -> Self {
        self.random_data = random_data;
        self
    }

    pub fn with_sidelobe_suppression(mut self, methods: Vec<SidelobeSuppression>) -> Self {
        self.sidelobe_suppression_methods = methods;
        self
    }

    pub fn with_dc_subcarrier(mut self, options: Vec<DcSubcarrier>) -> Self {
        self.dc_subcarrier = options;
        self
    }

    pub fn with_time_varying_realism(mut self, policies: Vec<TimeVaryingRealism>) -> Self {
        self.time_varying_realism = policies;
        self
    }

    /// Parse string tags for every policy list
    pub fn with_policy_tags(
        mut self,
        sidelobe: &[&str],
        dc: &[&str],
        realism: &[&str],
    ) -> SynthResult<Self> {
        self.sidelobe_suppression_methods =
            sidelobe.iter().map(|t| t.parse()).collect::<SynthResult<_>>()?;
        self.dc_subcarrier = dc.iter().map(|t| t.parse()).collect::<SynthResult<_>>()?;
        self.time_varying_realism = TimeVaryingRealism::expand_tags(realism)?;
        Ok(self)
    }
}

/// Per-sample OFDM policy choices
#[derive(Debug, Clone, PartialEq)]
pub struct OfdmParams {
    pub num_subcarriers: usize,
    pub cyclic_prefix_len: usize,
    /// Alphabet for `Fixed` subcarrier modulation
    pub constellation: String,
    pub subcarrier_modulation: SubcarrierModulation,
    pub sidelobe_suppression: SidelobeSuppression,
    pub dc_subcarrier: DcSubcarrier,
    pub time_varying_realism: TimeVaryingRealism,
}

/// One point in the policy product, without the subcarrier count
#[derive(Debug, Clone)]
struct PolicyCombination {
    constellation: String,
    subcarrier_modulation: SubcarrierModulation,
    cyclic_prefix_ratio: f64,
    sidelobe_suppression: SidelobeSuppression,
    dc_subcarrier: DcSubcarrier,
    time_varying_realism: TimeVaryingRealism,
}

/// OFDM generator
#[derive(Debug, Clone)]
pub struct OfdmGenerator {
    config: OfdmConfig,
    catalog: Arc<ConstellationCatalog>,
    fixed_lpf_taps: Vec<f64>,
}

impl OfdmGenerator {
    pub fn new(config: OfdmConfig) -> SynthResult<Self> {
        let catalog = Arc::new(ConstellationCatalog::default_catalog()?.clone());
        Self::with_catalog(config, catalog)
    }

    pub fn with_catalog(
        mut config: OfdmConfig,
        catalog: Arc<ConstellationCatalog>,
    ) -> SynthResult<Self> {
        if config.constellations.is_empty() {
            return Err(SynthError::EmptyConfiguration("constellations"));
        }
        if config.num_subcarriers.is_empty() {
            return Err(SynthError::EmptyConfiguration("num_subcarriers"));
        }
        if config.cyclic_prefix_ratios.is_empty() {
            return Err(SynthError::EmptyConfiguration("cyclic_prefix_ratios"));
        }
        if config.sidelobe_suppression_methods.is_empty() {
            return Err(SynthError::EmptyConfiguration("sidelobe_suppression_methods"));
        }
        if config.dc_subcarrier.is_empty() {
            return Err(SynthError::EmptyConfiguration("dc_subcarrier"));
        }
        if config.time_varying_realism.is_empty() {
            return Err(SynthError::EmptyConfiguration("time_varying_realism"));
        }
        if config.num_iq_samples == 0 {
            return Err(SynthError::invalid("num_iq_samples", 0.0));
        }
        for name in config.constellations.iter_mut() {
            *name = name.to_lowercase();
            catalog.get(name)?;
        }
        for &nsc in &config.num_subcarriers {
            if nsc < MIN_SUBCARRIERS || nsc % 2 != 0 {
                return Err(SynthError::invalid("num_subcarriers", nsc as f64));
            }
        }
        for &ratio in &config.cyclic_prefix_ratios {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(SynthError::invalid("cyclic_prefix_ratio", ratio));
            }
        }

        Ok(Self {
            config,
            catalog,
            fixed_lpf_taps: sidelobe::fixed_lpf_taps()?,
        })
    }

    pub fn config(&self) -> &OfdmConfig {
        &self.config
    }

    fn combinations(&self) -> Vec<PolicyCombination> {
        let c = &self.config;
        let mut out = Vec::new();
        for constellation in &c.constellations {
            for &subcarrier_modulation in SubcarrierModulation::ALL {
                for &cyclic_prefix_ratio in &c.cyclic_prefix_ratios {
                    for &sidelobe_suppression in &c.sidelobe_suppression_methods {
                        for &dc_subcarrier in &c.dc_subcarrier {
                            for &time_varying_realism in &c.time_varying_realism {
                                out.push(PolicyCombination {
                                    constellation: constellation.clone(),
                                    subcarrier_modulation,
                                    cyclic_prefix_ratio,
                                    sidelobe_suppression,
                                    dc_subcarrier,
                                    time_varying_realism,
                                });
                            }
                        }
                    }
                }
            }
        }
        out
    }

    /// One class per subcarrier count (`ofdm-N`), each sample drawing a
    /// policy combination uniformly from the full product
    pub fn build_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<WorkOrder> {
        let combos = self.combinations();
        let per_class = self.config.num_samples_per_class;
        let mut orders = Vec::with_capacity(self.config.num_subcarriers.len() * per_class);

        for (class_idx, &nsc) in self.config.num_subcarriers.iter().enumerate() {
            let class_name = format!("ofdm-{}", nsc);
            for i in 0..per_class {
                let combo = &combos[rng.gen_range(0..combos.len())];
                let params = OfdmParams {
                    num_subcarriers: nsc,
                    cyclic_prefix_len: (combo.cyclic_prefix_ratio * nsc as f64) as usize,
                    constellation: combo.constellation.clone(),
                    subcarrier_modulation: combo.subcarrier_modulation,
                    sidelobe_suppression: combo.sidelobe_suppression,
                    dc_subcarrier: combo.dc_subcarrier,
                    time_varying_realism: combo.time_varying_realism,
                };
                let descriptor = RequestedDescriptor::new(class_name.as_str())
                    .with_bits_per_symbol(2.0)
                    .with_samples_per_symbol(2);
                orders.push(WorkOrder::new(
                    class_name.as_str(),
                    (class_idx * per_class + i) as u64,
                    SynthesisParams::Ofdm(params),
                    descriptor,
                ));
            }
        }
        orders
    }

    /// Time symbols needed so the serialized stream still covers the
    /// output after the suppression trim
    fn num_time_symbols(&self, params: &OfdmParams) -> SynthResult<usize> {
        let n = self.config.num_iq_samples;
        let symbol_len = 2 * params.num_subcarriers + params.cyclic_prefix_len;
        let trim = sidelobe::max_trim(params.sidelobe_suppression)?;
        let by_samples = n / params.num_subcarriers;
        let by_stream = (n + trim).div_ceil(symbol_len);
        Ok(by_samples.max(by_stream).max(1))
    }

    fn validate(&self, params: &OfdmParams) -> SynthResult<()> {
        let nsc = params.num_subcarriers;
        if nsc < MIN_SUBCARRIERS || nsc % 2 != 0 {
            return Err(SynthError::invalid("num_subcarriers", nsc as f64));
        }
        if params.cyclic_prefix_len > nsc {
            return Err(SynthError::invalid(
                "cyclic_prefix_len",
                params.cyclic_prefix_len as f64,
            ));
        }
        if params.sidelobe_suppression.is_windowed() && params.cyclic_prefix_len == 0 {
            return Err(SynthError::invalid("cyclic_prefix_len", 0.0));
        }
        Ok(())
    }

    fn alphabets_for(&self, params: &OfdmParams) -> SynthResult<Vec<&Alphabet>> {
        match params.subcarrier_modulation {
            SubcarrierModulation::Fixed => Ok(vec![self.catalog.get(&params.constellation)?]),
            SubcarrierModulation::Random => self
                .config
                .constellations
                .iter()
                .map(|name| self.catalog.get(name))
                .collect(),
        }
    }

    fn render<R: Rng + ?Sized>(&self, params: &OfdmParams, rng: &mut R) -> SynthResult<Waveform> {
        let n = self.config.num_iq_samples;
        let nsc = params.num_subcarriers;
        let cols = self.num_time_symbols(params)?;
        let pool = self.alphabets_for(params)?;

        let mut grid = match params.subcarrier_modulation {
            SubcarrierModulation::Fixed => {
                fixed_alphabet_grid(pool[0], nsc, cols, |order| rng.gen_range(0..order))
            }
            SubcarrierModulation::Random => {
                let per_subcarrier: Vec<&Alphabet> =
                    (0..nsc).map(|_| pool[rng.gen_range(0..pool.len())]).collect();
                mixed_alphabet_grid(&per_subcarrier, nsc, cols, |order| {
                    rng.gen_range(0..MIXED_SYMBOL_RANGE) % order
                })
            }
        };

        if params.dc_subcarrier == DcSubcarrier::Off {
            let dc = grid.dc_row();
            grid.zero_row(dc);
        }

        let bursts = realism::apply(&mut grid, params.time_varying_realism, rng);

        let modulator = SymbolModulator::new(grid.fft_size(), params.cyclic_prefix_len);
        let symbols = modulator.modulate(&grid);
        let stream = sidelobe::serialize(
            &symbols,
            params.sidelobe_suppression,
            grid.fft_size(),
            params.cyclic_prefix_len,
            &self.fixed_lpf_taps,
            rng,
        )?;

        let start = self.window_start(params, bursts, stream.len(), rng)?;
        Ok(Waveform::new(stream[start..start + n].to_vec()))
    }

    /// Randomized start of the output window
    ///
    /// Bursty streams start near a burst boundary, windowed streams skip
    /// the first ramp.
    fn window_start<R: Rng + ?Sized>(
        &self,
        params: &OfdmParams,
        bursts: BurstPattern,
        stream_len: usize,
        rng: &mut R,
    ) -> SynthResult<usize> {
        let n = self.config.num_iq_samples;
        if stream_len < n {
            return Err(SynthError::NumericalDegeneracy(format!(
                "OFDM stream of {} samples cannot supply {} output samples",
                stream_len, n
            )));
        }
        let latest = stream_len - n;
        let symbol_dur = 2 * params.num_subcarriers;
        let burst_span = symbol_dur * bursts.burst_dur;
        let window_len = params.cyclic_prefix_len;

        // Every range is capped so the drawn start is itself a valid start
        let bounded = |rng: &mut R, lo: usize, hi: usize| {
            randint(rng, lo.min(latest), hi.min(latest + 1))
        };
        let start = if params.num_subcarriers * 4 * bursts.burst_dur < n {
            bounded(rng, 0, latest)
        } else if bursts.original_on {
            let lower = (burst_span as f64 - n as f64 * BURST_LEAD_FRACTION).max(0.0) as usize;
            bounded(rng, lower, burst_span)
        } else if params.sidelobe_suppression.is_windowed() {
            bounded(rng, window_len, burst_span + window_len)
        } else {
            bounded(rng, 0, burst_span)
        };
        trace!("ofdm-{}: window start {} of {}", params.num_subcarriers, start, latest);
        Ok(start)
    }
}

impl Generator for OfdmGenerator {
    fn family(&self) -> ModulationFamily {
        ModulationFamily::Ofdm
    }

    fn num_iq_samples(&self) -> usize {
        self.config.num_iq_samples
    }

    fn synthesize(&self, order: &WorkOrder) -> SynthResult<Sample> {
        let SynthesisParams::Ofdm(params) = &order.params else {
            return Err(SynthError::FamilyMismatch {
                expected: ModulationFamily::Ofdm.name(),
                found: order.family().name(),
            });
        };
        self.validate(params)?;

        let waveform = with_seed(order.index, self.config.random_data, |rng| {
            self.render(params, rng)
        })?;
        debug!(
            "{} #{}: cp {}, {} / {} / dc {} / {}",
            order.class_name,
            order.index,
            params.cyclic_prefix_len,
            params.subcarrier_modulation,
            params.sidelobe_suppression,
            params.dc_subcarrier,
            params.time_varying_realism
        );
        Ok((waveform, order.descriptor.resolve(None)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn params(nsc: usize, cp: usize, method: SidelobeSuppression) -> OfdmParams {
        OfdmParams {
            num_subcarriers: nsc,
            cyclic_prefix_len: cp,
            constellation: "qpsk".into(),
            subcarrier_modulation: SubcarrierModulation::Fixed,
            sidelobe_suppression: method,
            dc_subcarrier: DcSubcarrier::On,
            time_varying_realism: TimeVaryingRealism::Off,
        }
    }

    fn order(p: OfdmParams, index: u64) -> WorkOrder {
        let name = format!("ofdm-{}", p.num_subcarriers);
        WorkOrder::new(
            name.as_str(),
            index,
            SynthesisParams::Ofdm(p),
            RequestedDescriptor::new(name.as_str()),
        )
    }

    #[test]
    fn test_tag_parsing() {
        assert_eq!("rand_lpf".parse::<SidelobeSuppression>(), Ok(SidelobeSuppression::RandLpf));
        assert_eq!(
            "hamming".parse::<SidelobeSuppression>(),
            Err(SynthError::UnknownSidelobeSuppression("hamming".into()))
        );
        assert_eq!("off".parse::<DcSubcarrier>(), Ok(DcSubcarrier::Off));
        assert!("maybe".parse::<DcSubcarrier>().is_err());
        assert!("mixed".parse::<SubcarrierModulation>().is_err());
        assert_eq!(SidelobeSuppression::WinCenter.to_string(), "win_center");
    }

    #[test]
    fn test_realism_on_expansion() {
        assert_eq!(
            TimeVaryingRealism::expand_tags(&["on"]).unwrap(),
            vec![TimeVaryingRealism::FullBursty, TimeVaryingRealism::PartialBursty]
        );
        assert_eq!(
            TimeVaryingRealism::expand_tags(&["on", "off"]).unwrap(),
            TimeVaryingRealism::ALL.to_vec()
        );
        assert!(TimeVaryingRealism::expand_tags(&["sometimes"]).is_err());
    }

    #[test]
    fn test_index_classes() {
        let gen = OfdmGenerator::new(
            OfdmConfig::default()
                .with_num_subcarriers(vec![64, 256])
                .with_num_samples_per_class(4),
        )
        .unwrap();
        let orders = gen.build_index(&mut ChaCha8Rng::seed_from_u64(0));
        assert_eq!(orders.len(), 8);
        assert_eq!(orders[0].class_name, "ofdm-64");
        assert_eq!(orders[7].class_name, "ofdm-256");
        assert_eq!(orders[7].index, 7);
        for o in &orders {
            let SynthesisParams::Ofdm(p) = &o.params else {
                panic!("not ofdm");
            };
            assert!(p.cyclic_prefix_len == p.num_subcarriers / 8 || p.cyclic_prefix_len == p.num_subcarriers / 4);
            assert_eq!(o.descriptor.bits_per_symbol, 2.0);
            assert_eq!(o.descriptor.samples_per_symbol, 2);
        }
    }

    #[test]
    fn test_every_method_fills_output() {
        let gen = OfdmGenerator::new(OfdmConfig::default().with_num_iq_samples(300)).unwrap();
        for &method in SidelobeSuppression::ALL {
            for nsc in [8, 64, 2048] {
                let (waveform, _) = gen.synthesize(&order(params(nsc, nsc / 4, method), 11)).unwrap();
                assert_eq!(waveform.len(), 300, "{} nsc {}", method, nsc);
                assert!(waveform.is_finite());
                assert!(waveform.energy() > 0.0);
            }
        }
    }

    #[test]
    fn test_bursty_policies_fill_output() {
        let gen = OfdmGenerator::new(OfdmConfig::default().with_num_iq_samples(1000)).unwrap();
        for policy in [TimeVaryingRealism::FullBursty, TimeVaryingRealism::PartialBursty] {
            for seed in 0..10 {
                let mut p = params(64, 16, SidelobeSuppression::WinCenter);
                p.time_varying_realism = policy;
                p.subcarrier_modulation = SubcarrierModulation::Random;
                let (waveform, _) = gen.synthesize(&order(p, seed)).unwrap();
                assert_eq!(waveform.len(), 1000);
            }
        }
    }

    #[test]
    fn test_window_start_stays_uniform_near_stream_end() {
        // 100 output samples from a 144-sample stream leave 45 valid starts
        let gen = OfdmGenerator::new(OfdmConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for (method, earliest) in [(SidelobeSuppression::None, 0), (SidelobeSuppression::WinCenter, 16)] {
            let p = params(64, 16, method);
            let mut at_end = 0;
            for _ in 0..200 {
                let start = gen.window_start(&p, BurstPattern::default(), 144, &mut rng).unwrap();
                assert!((earliest..=44).contains(&start), "{}: {}", method, start);
                if start == 44 {
                    at_end += 1;
                }
            }
            assert!(at_end < 20, "{}: {} starts pinned to the end", method, at_end);
        }
        assert!(gen.window_start(&params(64, 16, SidelobeSuppression::None), BurstPattern::default(), 99, &mut rng).is_err());
    }

    #[test]
    fn test_window_without_prefix_rejected() {
        let gen = OfdmGenerator::new(OfdmConfig::default()).unwrap();
        let err = gen
            .synthesize(&order(params(64, 0, SidelobeSuppression::WinStart), 0))
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_odd_subcarriers_rejected() {
        let err = OfdmGenerator::new(OfdmConfig::default().with_num_subcarriers(vec![63]))
            .unwrap_err();
        assert_eq!(err, SynthError::invalid("num_subcarriers", 63.0));
    }
}
