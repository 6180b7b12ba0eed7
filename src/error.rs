//! Error types for waveform synthesis.
//!
//! Every failure here is fatal: synthesis is deterministic computation over
//! validated inputs, so an error means a configuration or programming defect.

use thiserror::Error;

/// Errors that can occur while configuring or running a generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    /// Modulation name is not present in the catalog.
    #[error("unknown modulation: {0}")]
    UnknownModulation(String),

    /// Sidelobe-suppression tag is not one of none/lpf/rand_lpf/win_start/win_center.
    #[error("unknown sidelobe suppression method: {0}")]
    UnknownSidelobeSuppression(String),

    /// Time-varying realism tag is not one of off/full_bursty/partial_bursty.
    #[error("unknown time-varying realism policy: {0}")]
    UnknownTimeVaryingRealism(String),

    /// Subcarrier modulation tag is not fixed/random.
    #[error("unknown subcarrier modulation type: {0}")]
    UnknownSubcarrierModulation(String),

    /// DC subcarrier tag is not on/off.
    #[error("unknown DC subcarrier option: {0}")]
    UnknownDcSubcarrier(String),

    /// A numeric parameter is outside its valid domain.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A work order was routed to a generator of another family.
    #[error("work order for {found} family sent to {expected} generator")]
    FamilyMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A required configuration list is empty.
    #[error("empty configuration: {0}")]
    EmptyConfiguration(&'static str),

    /// Numerical computation produced an unusable result.
    #[error("numerical degeneracy: {0}")]
    NumericalDegeneracy(String),
}

impl SynthError {
    /// True for the configuration class of errors (raised before or at
    /// synthesis start), false for numerical degeneracies.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, SynthError::NumericalDegeneracy(_))
    }

    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        SynthError::InvalidParameter { name, value }
    }
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(SynthError::UnknownModulation("17qam".into()).is_configuration());
        assert!(SynthError::invalid("alpha", 0.0).is_configuration());
        assert!(!SynthError::NumericalDegeneracy("empty taps".into()).is_configuration());
    }

    #[test]
    fn test_error_display() {
        let err = SynthError::invalid("alpha", -0.5);
        assert_eq!(err.to_string(), "invalid parameter alpha: -0.5");
    }
}
