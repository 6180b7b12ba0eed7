//! Indexed synthetic datasets
//!
//! A dataset is a generator table plus the work orders built for it at
//! construction. `get(i)` synthesizes entry `i` on demand, passes the
//! waveform through the dataset's `Transform` and labels it.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constellations::{is_tone_name, tone_alphabet, tone_alphabets, ConstellationCatalog};
use crate::descriptor::SignalDescriptor;
use crate::error::{SynthError, SynthResult};
use crate::generators::{
    AmGenerator, AnalogConfig, ConstellationConfig, ConstellationGenerator, FmGenerator,
    FskConfig, FskGenerator, GeneratorTable, OfdmConfig, OfdmGenerator,
};
use crate::traits::{SampleStore, Transform};
use crate::waveform::Waveform;
use crate::work_order::{Sample, WorkOrder};

/// Default oversampling for constellation classes in the digital composite
pub const DIGITAL_CONSTELLATION_SPS: usize = 2;
/// Oversampling for FSK-family classes in the digital composite
pub const DIGITAL_FSK_SPS: usize = 8;

/// Pass-through transform, labels each sample with its descriptor
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    type Label = SignalDescriptor;

    fn apply(&self, waveform: Waveform) -> Waveform {
        waveform
    }

    fn label_of(&self, descriptor: &SignalDescriptor) -> SignalDescriptor {
        descriptor.clone()
    }
}

/// Mixed constellation + FSK dataset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalModulationConfig {
    /// `None` selects every catalog constellation and tone alphabet
    pub modulations: Option<Vec<String>>,
    pub num_iq_samples: usize,
    pub num_samples_per_class: usize,
    /// Constellation oversampling; FSK classes always use `DIGITAL_FSK_SPS`
    pub iq_samples_per_symbol: Option<usize>,
    pub random_data: bool,
    pub random_pulse_shaping: bool,
}

impl Default for DigitalModulationConfig {
    fn default() -> Self {
        Self {
            modulations: Some(vec!["bpsk".into(), "2gfsk".into()]),
            num_iq_samples: 100,
            num_samples_per_class: 100,
            iq_samples_per_symbol: None,
            random_data: false,
            random_pulse_shaping: false,
        }
    }
}

impl DigitalModulationConfig {
    pub fn with_modulations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modulations = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_all_modulations(mut self) -> Self {
        self.modulations = None;
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
        self.iq_samples_per_symbol = Some(sps);
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

/// Modulation list split by family
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DigitalSplit {
    pub constellations: Vec<String>,
    /// FSK and MSK classes
    pub fsks: Vec<String>,
    /// Gaussian-filtered classes (GFSK, GMSK)
    pub gaussian: Vec<String>,
}

impl DigitalSplit {
    /// Route each name to its family, preserving order
    pub fn new(names: &[String], catalog: &ConstellationCatalog) -> SynthResult<Self> {
        let mut split = Self::default();
        for name in names.iter().map(|n| n.to_lowercase()) {
            if catalog.contains(&name) {
                split.constellations.push(name);
            } else if is_tone_name(&name) {
                if tone_alphabet(&name)?.kind().is_gaussian() {
                    split.gaussian.push(name);
                } else {
                    split.fsks.push(name);
                }
            } else {
                return Err(SynthError::UnknownModulation(name));
            }
        }
        Ok(split)
    }
}

/// Synthetic dataset over a fixed index of work orders
pub struct SyntheticDataset<T: Transform = Identity> {
    table: GeneratorTable,
    orders: Vec<WorkOrder>,
    transform: T,
}

impl SyntheticDataset<Identity> {
    /// Dataset over an explicit table and index
    pub fn new(table: GeneratorTable, orders: Vec<WorkOrder>) -> Self {
        Self {
            table,
            orders,
            transform: Identity,
        }
    }

    pub fn constellation<R: Rng + ?Sized>(
        config: ConstellationConfig,
        rng: &mut R,
    ) -> SynthResult<Self> {
        let gen = ConstellationGenerator::new(config)?;
        let orders = gen.build_index(rng)?;
        Ok(Self::new(GeneratorTable::new().with(gen), orders))
    }

    pub fn fsk<R: Rng + ?Sized>(config: FskConfig, rng: &mut R) -> SynthResult<Self> {
        let gen = FskGenerator::new(config)?;
        let orders = gen.build_index(rng)?;
        Ok(Self::new(GeneratorTable::new().with(gen), orders))
    }

    pub fn ofdm<R: Rng + ?Sized>(config: OfdmConfig, rng: &mut R) -> SynthResult<Self> {
        let gen = OfdmGenerator::new(config)?;
        let orders = gen.build_index(rng);
        Ok(Self::new(GeneratorTable::new().with(gen), orders))
    }

    pub fn am(config: AnalogConfig) -> SynthResult<Self> {
        let gen = AmGenerator::new(config)?;
        let orders = gen.build_index();
        Ok(Self::new(GeneratorTable::new().with(gen), orders))
    }

    pub fn fm(config: AnalogConfig) -> SynthResult<Self> {
        let gen = FmGenerator::new(config)?;
        let orders = gen.build_index();
        Ok(Self::new(GeneratorTable::new().with(gen), orders))
    }

    /// Constellation classes followed by FSK/MSK then GFSK/GMSK classes
    ///
    /// Each of the three groups numbers its entries from zero.
    pub fn digital<R: Rng + ?Sized>(
        config: DigitalModulationConfig,
        rng: &mut R,
    ) -> SynthResult<Self> {
        let catalog = Arc::new(ConstellationCatalog::default_catalog()?.clone());
        Self::digital_with_catalog(config, catalog, rng)
    }

    pub fn digital_with_catalog<R: Rng + ?Sized>(
        config: DigitalModulationConfig,
        catalog: Arc<ConstellationCatalog>,
        rng: &mut R,
    ) -> SynthResult<Self> {
        let names: Vec<String> = match &config.modulations {
            Some(names) => names.clone(),
            None => catalog
                .names()
                .map(String::from)
                .chain(tone_alphabets().iter().map(|t| t.name().to_string()))
                .collect(),
        };
        let split = DigitalSplit::new(&names, &catalog)?;

        let mut table = GeneratorTable::new();
        let mut orders = Vec::new();

        if !split.constellations.is_empty() {
            let gen = ConstellationGenerator::with_catalog(
                ConstellationConfig {
                    constellations: split.constellations.clone(),
                    num_iq_samples: config.num_iq_samples,
                    num_samples_per_class: config.num_samples_per_class,
                    iq_samples_per_symbol: config
                        .iq_samples_per_symbol
                        .unwrap_or(DIGITAL_CONSTELLATION_SPS),
                    random_data: config.random_data,
                    random_pulse_shaping: config.random_pulse_shaping,
                },
                catalog,
            )?;
            orders.extend(gen.build_index(rng)?);
            table.register(gen);
        }

        if !split.fsks.is_empty() || !split.gaussian.is_empty() {
            let gen = FskGenerator::new(FskConfig {
                modulations: split.fsks.iter().chain(&split.gaussian).cloned().collect(),
                num_iq_samples: config.num_iq_samples,
                num_samples_per_class: config.num_samples_per_class,
                iq_samples_per_symbol: DIGITAL_FSK_SPS,
                random_data: config.random_data,
                random_pulse_shaping: config.random_pulse_shaping,
            })?;
            orders.extend(gen.build_index_for(&split.fsks, rng)?);
            orders.extend(gen.build_index_for(&split.gaussian, rng)?);
            table.register(gen);
        }

        if table.is_empty() {
            return Err(SynthError::EmptyConfiguration("modulations"));
        }
        info!(
            "digital dataset: {} constellation, {} fsk, {} gaussian classes, {} entries",
            split.constellations.len(),
            split.fsks.len(),
            split.gaussian.len(),
            orders.len()
        );
        Ok(Self::new(table, orders))
    }
}

impl<T: Transform> SyntheticDataset<T> {
    /// Replace the post-synthesis transform
    pub fn with_transform<U: Transform>(self, transform: U) -> SyntheticDataset<U> {
        SyntheticDataset {
            table: self.table,
            orders: self.orders,
            transform,
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[WorkOrder] {
        &self.orders
    }

    pub fn table(&self) -> &GeneratorTable {
        &self.table
    }

    fn order(&self, i: usize) -> SynthResult<&WorkOrder> {
        self.orders
            .get(i)
            .ok_or_else(|| SynthError::invalid("dataset index", i as f64))
    }

    /// Raw synthesized sample for entry `i`, before the transform
    pub fn sample(&self, i: usize) -> SynthResult<Sample> {
        self.table.synthesize(self.order(i)?)
    }

    /// Transformed waveform and label for entry `i`
    pub fn get(&self, i: usize) -> SynthResult<(Waveform, T::Label)> {
        let (waveform, descriptor) = self.sample(i)?;
        Ok((self.transform.apply(waveform), self.transform.label_of(&descriptor)))
    }

    /// Synthesize every entry in parallel and write it to `store`, keyed
    /// by dataset position
    ///
    /// Returns the number of samples written. Stops early, without error,
    /// once `cancel` is raised.
    pub fn write_to<S>(&self, store: &mut S, cancel: &AtomicBool) -> Result<usize, S::Error>
    where
        S: SampleStore,
        S::Error: From<SynthError>,
    {
        let samples = self.table.synthesize_batch(&self.orders, cancel)?;
        let mut written = 0;
        for (position, sample) in samples.into_iter().enumerate() {
            if let Some((waveform, descriptor)) = sample {
                store.put(position as u64, waveform, descriptor)?;
                written += 1;
            }
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::work_order::ModulationFamily;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// Labels by class name and scales the waveform
    struct ClassLabel;

    impl Transform for ClassLabel {
        type Label = String;

        fn apply(&self, waveform: Waveform) -> Waveform {
            Waveform::new(waveform.samples().iter().map(|s| *s * 2.0).collect())
        }

        fn label_of(&self, descriptor: &SignalDescriptor) -> String {
            descriptor.class_name.clone()
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        samples: HashMap<u64, Sample>,
    }

    #[derive(Debug)]
    #[allow(dead_code)]
    enum StoreError {
        Missing(u64),
        Synth(SynthError),
    }

    impl From<SynthError> for StoreError {
        fn from(err: SynthError) -> Self {
            StoreError::Synth(err)
        }
    }

    impl SampleStore for MemoryStore {
        type Error = StoreError;

        fn get(&self, index: u64) -> Result<Sample, StoreError> {
            self.samples.get(&index).cloned().ok_or(StoreError::Missing(index))
        }

        fn put(
            &mut self,
            index: u64,
            waveform: Waveform,
            descriptor: SignalDescriptor,
        ) -> Result<(), StoreError> {
            self.samples.insert(index, (waveform, descriptor));
            Ok(())
        }
    }

    #[test]
    fn test_digital_split() {
        let names: Vec<String> = ["BPSK", "2gfsk", "4fsk", "16qam", "8gmsk", "2msk"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let split = DigitalSplit::new(&names, ConstellationCatalog::default_catalog().unwrap()).unwrap();
        assert_eq!(split.constellations, ["bpsk", "16qam"]);
        assert_eq!(split.fsks, ["4fsk", "2msk"]);
        assert_eq!(split.gaussian, ["2gfsk", "8gmsk"]);

        let bad = vec!["bpsk".to_string(), "wifi".to_string()];
        assert_eq!(
            DigitalSplit::new(&bad, ConstellationCatalog::default_catalog().unwrap()).unwrap_err(),
            SynthError::UnknownModulation("wifi".into())
        );
    }

    #[test]
    fn test_digital_dataset_layout() {
        let dataset = SyntheticDataset::digital(
            DigitalModulationConfig::default()
                .with_modulations(["qpsk", "2gfsk", "4fsk"])
                .with_num_samples_per_class(3),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(dataset.len(), 9);

        let names: Vec<&str> = dataset.orders().iter().map(|o| o.class_name.as_str()).collect();
        assert_eq!(names, ["qpsk", "qpsk", "qpsk", "4fsk", "4fsk", "4fsk", "2gfsk", "2gfsk", "2gfsk"]);
        // Each group restarts its numbering
        assert_eq!(dataset.orders()[3].index, 0);
        assert_eq!(dataset.orders()[6].index, 0);

        assert_eq!(dataset.orders()[0].descriptor.samples_per_symbol, DIGITAL_CONSTELLATION_SPS);
        assert_eq!(dataset.orders()[3].descriptor.samples_per_symbol, DIGITAL_FSK_SPS);
        assert!(dataset.table().contains(ModulationFamily::Constellation));
        assert!(dataset.table().contains(ModulationFamily::Fsk));

        for i in 0..dataset.len() {
            let (waveform, descriptor) = dataset.get(i).unwrap();
            assert_eq!(waveform.len(), 100);
            assert_eq!(descriptor.class_name, dataset.orders()[i].class_name);
        }
    }

    #[test]
    fn test_all_modulations() {
        let dataset = SyntheticDataset::digital(
            DigitalModulationConfig::default()
                .with_all_modulations()
                .with_num_samples_per_class(1),
            &mut rng(),
        )
        .unwrap();
        // 25 constellations + 16 tone alphabets
        assert_eq!(dataset.len(), 41);
    }

    #[test]
    fn test_transform_applied() {
        let dataset = SyntheticDataset::fm(AnalogConfig::default().with_num_samples_per_class(2))
            .unwrap()
            .with_transform(ClassLabel);
        let (raw, _) = dataset.sample(1).unwrap();
        let (scaled, label) = dataset.get(1).unwrap();
        assert_eq!(label, "fm");
        for (a, b) in raw.samples().iter().zip(scaled.samples()) {
            assert!((*a * 2.0 - *b).norm() < 1e-12);
        }
    }

    #[test]
    fn test_out_of_range() {
        let dataset = SyntheticDataset::am(AnalogConfig::default().with_num_samples_per_class(1)).unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(dataset.get(3).is_err());
    }

    #[test]
    fn test_write_to_store() {
        let dataset = SyntheticDataset::ofdm(
            OfdmConfig::default()
                .with_num_subcarriers(vec![64])
                .with_num_samples_per_class(8),
            &mut rng(),
        )
        .unwrap();
        let mut store = MemoryStore::default();
        let written = dataset.write_to(&mut store, &AtomicBool::new(false)).unwrap();
        assert_eq!(written, 8);

        let (stored, descriptor) = store.get(5).unwrap();
        let (fresh, _) = dataset.sample(5).unwrap();
        assert_eq!(stored, fresh);
        assert_eq!(descriptor.class_name, "ofdm-64");
        assert!(matches!(store.get(8), Err(StoreError::Missing(8))));
    }
}
