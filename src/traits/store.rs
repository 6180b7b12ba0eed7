//! External collaborator traits
//!
//! Generators never touch these. They describe what a dataset pipeline
//! plugs in around synthesis: persistent storage keyed by integer index,
//! and the post-synthesis transform/labeling stage.

use crate::descriptor::SignalDescriptor;
use crate::waveform::Waveform;
use crate::work_order::Sample;

/// Key-value store of previously generated samples
pub trait SampleStore {
    /// Store-specific failure type
    type Error;

    /// Read the sample stored under `index`
    fn get(&self, index: u64) -> Result<Sample, Self::Error>;

    /// Write a sample under `index`
    fn put(
        &mut self,
        index: u64,
        waveform: Waveform,
        descriptor: SignalDescriptor,
    ) -> Result<(), Self::Error>;
}

/// Pure post-synthesis stage: waveform augmentation and label extraction
pub trait Transform: Send + Sync {
    /// Label type handed to the training pipeline
    type Label;

    /// Transform a waveform
    fn apply(&self, waveform: Waveform) -> Waveform;

    /// Derive the label for a descriptor
    fn label_of(&self, descriptor: &SignalDescriptor) -> Self::Label;
}
