//! Family → generator dispatch

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rayon::prelude::*;

use crate::error::{SynthError, SynthResult};
use crate::traits::Generator;
use crate::work_order::{ModulationFamily, Sample, WorkOrder};

/// Routes work orders to the generator registered for their family
#[derive(Default)]
pub struct GeneratorTable {
    generators: HashMap<ModulationFamily, Box<dyn Generator>>,
}

impl GeneratorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, replacing any previous one for the same family
    pub fn register<G: Generator + 'static>(&mut self, generator: G) {
        let family = generator.family();
        if self.generators.insert(family, Box::new(generator)).is_some() {
            debug!("replaced {} generator", family);
        }
    }

    /// Builder form of `register`
    pub fn with<G: Generator + 'static>(mut self, generator: G) -> Self {
        self.register(generator);
        self
    }

    pub fn get(&self, family: ModulationFamily) -> SynthResult<&dyn Generator> {
        self.generators
            .get(&family)
            .map(|g| g.as_ref())
            .ok_or_else(|| SynthError::UnknownModulation(family.name().to_string()))
    }

    pub fn contains(&self, family: ModulationFamily) -> bool {
        self.generators.contains_key(&family)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Synthesize one work order
    pub fn synthesize(&self, order: &WorkOrder) -> SynthResult<Sample> {
        self.get(order.family())?.synthesize(order)
    }

    /// Synthesize many work orders in parallel
    ///
    /// Orders not yet started when `cancel` is raised come back as `None`.
    /// The first error aborts the batch.
    pub fn synthesize_batch(
        &self,
        orders: &[WorkOrder],
        cancel: &AtomicBool,
    ) -> SynthResult<Vec<Option<Sample>>> {
        let results = orders
            .par_iter()
            .map(|order| {
                if cancel.load(Ordering::Relaxed) {
                    return Ok(None);
                }
                self.synthesize(order).map(Some)
            })
            .collect::<SynthResult<Vec<_>>>()?;

        let skipped = results.iter().filter(|r| r.is_none()).count();
        if skipped > 0 {
            info!("batch cancelled: {} of {} orders skipped", skipped, orders.len());
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::RequestedDescriptor;
    use crate::generators::{AnalogConfig, FmGenerator};
    use crate::work_order::SynthesisParams;

    fn fm_table() -> (GeneratorTable, Vec<WorkOrder>) {
        let fm = FmGenerator::new(AnalogConfig::default().with_num_samples_per_class(16)).unwrap();
        let orders = fm.build_index();
        (GeneratorTable::new().with(fm), orders)
    }

    #[test]
    fn test_missing_family() {
        let (table, _) = fm_table();
        let order = WorkOrder::new(
            "qpsk",
            0,
            SynthesisParams::Constellation { excess_bandwidth: 0.35 },
            RequestedDescriptor::new("qpsk"),
        );
        assert_eq!(
            table.synthesize(&order).unwrap_err(),
            SynthError::UnknownModulation("constellation".into())
        );
    }

    #[test]
    fn test_batch_matches_sequential() {
        let (table, orders) = fm_table();
        let batch = table.synthesize_batch(&orders, &AtomicBool::new(false)).unwrap();
        assert_eq!(batch.len(), 16);
        for (order, sample) in orders.iter().zip(batch) {
            let (waveform, descriptor) = sample.unwrap();
            let (expected, _) = table.synthesize(order).unwrap();
            assert_eq!(waveform, expected);
            assert_eq!(descriptor.class_name, "fm");
        }
    }

    #[test]
    fn test_cancelled_batch_skips_all() {
        let (table, orders) = fm_table();
        let batch = table.synthesize_batch(&orders, &AtomicBool::new(true)).unwrap();
        assert!(batch.iter().all(Option::is_none));
    }
}
