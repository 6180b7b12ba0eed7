//! Signal descriptors
//!
//! A descriptor is built when the dataset index is constructed and may carry
//! an excess bandwidth that is only known once synthesis runs (Gaussian FSK
//! without randomized shaping). That is modeled as two values: the
//! `RequestedDescriptor` stored in the work order, and the `SignalDescriptor`
//! returned with the waveform.

use serde::{Deserialize, Serialize};

/// Descriptor as requested at index-construction time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestedDescriptor {
    pub class_name: String,
    pub bits_per_symbol: f64,
    pub samples_per_symbol: usize,
    /// `None` until the generator fixes it
    pub excess_bandwidth: Option<f64>,
    /// Normalized sample rate, 0 = unspecified
    pub sample_rate: f64,
}

impl RequestedDescriptor {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            bits_per_symbol: 0.0,
            samples_per_symbol: 0,
            excess_bandwidth: Some(0.0),
            sample_rate: 0.0,
        }
    }

    pub fn with_bits_per_symbol(mut self, bits_per_symbol: f64) -> Self {
        self.bits_per_symbol = bits_per_symbol;
        self
    }

    pub fn with_samples_per_symbol(mut self, samples_per_symbol: usize) -> Self {
        self.samples_per_symbol = samples_per_symbol;
        self
    }

    pub fn with_excess_bandwidth(mut self, excess_bandwidth: f64) -> Self {
        self.excess_bandwidth = Some(excess_bandwidth);
        self
    }

    /// Leave excess bandwidth to be resolved at synthesis time
    pub fn with_unresolved_excess_bandwidth(mut self) -> Self {
        self.excess_bandwidth = None;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.excess_bandwidth.is_some()
    }

    /// Fix the descriptor. `synthesized` is the excess bandwidth the
    /// generator actually used, if it determined one; otherwise the requested
    /// value (or 0) is kept.
    pub fn resolve(&self, synthesized: Option<f64>) -> SignalDescriptor {
        SignalDescriptor {
            class_name: self.class_name.clone(),
            bits_per_symbol: self.bits_per_symbol,
            samples_per_symbol: self.samples_per_symbol,
            excess_bandwidth: synthesized.or(self.excess_bandwidth).unwrap_or(0.0),
            sample_rate: self.sample_rate,
        }
    }
}

/// Attributes characterizing a synthesized waveform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalDescriptor {
    pub class_name: String,
    pub bits_per_symbol: f64,
    pub samples_per_symbol: usize,
    pub excess_bandwidth: f64,
    pub sample_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_requested_value() {
        let req = RequestedDescriptor::new("qpsk")
            .with_bits_per_symbol(2.0)
            .with_samples_per_symbol(2)
            .with_excess_bandwidth(0.35);
        let desc = req.resolve(None);
        assert_eq!(desc.class_name, "qpsk");
        assert_eq!(desc.excess_bandwidth, 0.35);
        assert_eq!(desc.samples_per_symbol, 2);
    }

    #[test]
    fn test_resolve_pending_value() {
        let req = RequestedDescriptor::new("2gfsk").with_unresolved_excess_bandwidth();
        assert!(!req.is_resolved());
        assert_eq!(req.resolve(Some(0.35)).excess_bandwidth, 0.35);
        assert_eq!(req.resolve(None).excess_bandwidth, 0.0);
        // Requested record is untouched
        assert!(!req.is_resolved());
    }
}
