//! Complex baseband waveform container

use num_complex::Complex64;

use crate::error::{SynthError, SynthResult};

/// Fixed-length sequence of complex baseband samples
///
/// Produced once per work order and handed to the caller by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<Complex64>,
}

impl Waveform {
    pub fn new(samples: Vec<Complex64>) -> Self {
        Self { samples }
    }

    /// Keep the trailing `len` samples of a synthesized stream
    ///
    /// Generators drop their filter start-up transient this way. A stream
    /// shorter than `len` is a numerical degeneracy, never padded.
    pub(crate) fn from_tail(stream: &[Complex64], len: usize) -> SynthResult<Self> {
        if stream.len() < len {
            return Err(SynthError::NumericalDegeneracy(format!(
                "stream of {} samples cannot supply {} output samples",
                stream.len(),
                len
            )));
        }
        Ok(Self::new(stream[stream.len() - len..].to_vec()))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Complex64> {
        self.samples
    }

    /// Sum of |x|² over all samples
    pub fn energy(&self) -> f64 {
        self.samples.iter().map(|s| s.norm_sqr()).sum()
    }

    /// True when no sample is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.samples.iter().all(|s| s.re.is_finite() && s.im.is_finite())
    }
}

impl From<Vec<Complex64>> for Waveform {
    fn from(samples: Vec<Complex64>) -> Self {
        Self::new(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tail_keeps_trailing_samples() {
        let stream: Vec<Complex64> = (0..10).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let wf = Waveform::from_tail(&stream, 4).unwrap();
        assert_eq!(wf.len(), 4);
        assert_eq!(wf.samples()[0].re, 6.0);
        assert_eq!(wf.samples()[3].re, 9.0);
    }

    #[test]
    fn test_from_tail_short_stream_is_degenerate() {
        let stream = vec![Complex64::new(1.0, 0.0); 3];
        let err = Waveform::from_tail(&stream, 4).unwrap_err();
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_energy_and_finite() {
        let wf = Waveform::new(vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, 1.0)]);
        assert!((wf.energy() - 26.0).abs() < 1e-12);
        assert!(wf.is_finite());

        let bad = Waveform::new(vec![Complex64::new(f64::NAN, 0.0)]);
        assert!(!bad.is_finite());
    }
}
