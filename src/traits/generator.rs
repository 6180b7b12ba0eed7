//! Generator trait - one implementation per modulation family

use crate::error::SynthResult;
use crate::work_order::{ModulationFamily, Sample, WorkOrder};

/// Waveform generator for a single modulation family
///
/// All setup (catalog, sample count, policy pools) is fixed at construction.
/// `synthesize` depends only on the work order, so independent orders may be
/// processed concurrently.
pub trait Generator: Send + Sync {
    /// Family this generator serves
    fn family(&self) -> ModulationFamily;

    /// Number of complex samples every produced waveform carries
    fn num_iq_samples(&self) -> usize;

    /// Produce the waveform and resolved descriptor for one work order
    fn synthesize(&self, order: &WorkOrder) -> SynthResult<Sample>;
}
