//! Complex symbol alphabets and the grid builders used by the catalog

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{SynthError, SynthResult};
use crate::traits::Constellation;
use crate::utils::{linspace, mean_magnitude};

/// Named complex alphabet
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet {
    name: String,
    points: Vec<Complex64>,
}

impl Alphabet {
    pub fn new(name: impl Into<String>, points: Vec<Complex64>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Scale the points to unit mean magnitude
    pub fn normalized(&self) -> SynthResult<Self> {
        if self.points.is_empty() {
            return Err(SynthError::NumericalDegeneracy(format!(
                "alphabet {} is empty",
                self.name
            )));
        }
        let mean = mean_magnitude(&self.points);
        if !(mean > 0.0) {
            return Err(SynthError::NumericalDegeneracy(format!(
                "alphabet {} has zero mean magnitude",
                self.name
            )));
        }
        Ok(Self {
            name: self.name.clone(),
            points: self.points.iter().map(|p| *p / mean).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Complex64] {
        &self.points
    }
}

impl Constellation for Alphabet {
    fn order(&self) -> usize {
        self.points.len()
    }

    fn point(&self, sym: usize) -> Complex64 {
        self.points[sym]
    }
}

/// Rectangular grid: real levels `re`, imaginary levels `im`
///
/// Row-major over the imaginary axis, matching a flattened meshgrid.
pub(crate) fn grid(re: &[f64], im: &[f64]) -> Vec<Complex64> {
    im.iter()
        .flat_map(|&q| re.iter().map(move |&i| Complex64::new(i, q)))
        .collect()
}

/// `n` real levels in [lo, 1] on the real axis (OOK/PAM/ASK)
pub(crate) fn real_levels(lo: f64, n: usize) -> Vec<Complex64> {
    grid(&linspace(lo, 1.0, n), &[0.0])
}

/// Square QAM: `side` × `side` levels in [-1, 1]
pub(crate) fn square(side: usize) -> Vec<Complex64> {
    let levels = linspace(-1.0, 1.0, side);
    grid(&levels, &levels)
}

/// Rectangular QAM: `re` × `im` levels in [-1, 1]
pub(crate) fn rectangular(re: usize, im: usize) -> Vec<Complex64> {
    grid(&linspace(-1.0, 1.0, re), &linspace(-1.0, 1.0, im))
}

/// `n` points evenly spaced on the unit circle starting at 0 rad
pub(crate) fn psk(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|k| Complex64::from_polar(1.0, 2.0 * PI * k as f64 / n as f64))
        .collect()
}

/// Cross QAM: a `side` × `side` square with its corner blocks removed
pub(crate) fn cross(side: usize) -> Vec<Complex64> {
    let full = square(side);
    let root = (full.len() as f64).sqrt();
    let spacing = 2.0 / (root - 1.0);
    let cutoff = spacing * (root / 6.0 - 0.5);
    full.into_iter()
        .filter(|p| p.re.abs() < 1.0 - cutoff || p.im.abs() < 1.0 - cutoff)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_order() {
        let pts = rectangular(2, 2);
        assert_eq!(pts[0], Complex64::new(-1.0, -1.0));
        assert_eq!(pts[1], Complex64::new(1.0, -1.0));
        assert_eq!(pts[2], Complex64::new(-1.0, 1.0));
    }

    #[test]
    fn test_cross_sizes() {
        assert_eq!(cross(6).len(), 32);
        assert_eq!(cross(12).len(), 128);
        assert_eq!(cross(24).len(), 512);
    }

    #[test]
    fn test_cross_removes_corners() {
        let pts = cross(6);
        assert!(!pts.iter().any(|p| p.re.abs() > 0.99 && p.im.abs() > 0.99));
    }

    #[test]
    fn test_normalized_mean_magnitude() {
        let ook = Alphabet::new("ook", real_levels(0.0, 2)).normalized().unwrap();
        assert!((ook.points()[1].re - 2.0).abs() < 1e-12);
        assert!((mean_magnitude(ook.points()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_alphabets() {
        assert!(Alphabet::new("empty", vec![]).normalized().is_err());
        assert!(Alphabet::new("zero", vec![Complex64::new(0.0, 0.0)]).normalized().is_err());
    }

    #[test]
    fn test_bits_per_symbol() {
        let qam = Alphabet::new("16qam", square(4));
        assert_eq!(qam.order(), 16);
        assert_eq!(qam.bits_per_symbol(), 4.0);
    }

    #[test]
    #[should_panic]
    fn test_point_out_of_range() {
        let bpsk = Alphabet::new("bpsk", real_levels(-1.0, 2));
        bpsk.point(2);
    }
}
