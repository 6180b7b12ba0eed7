//! Constellation catalog
//!
//! Process-wide, read-only tables built once on first access:
//! - digital alphabets (OOK, PAM, ASK, PSK, QAM, cross QAM), normalized to
//!   unit mean magnitude
//! - FSK/GFSK/MSK/GMSK tone alphabets for orders 2, 4, 8 and 16
//!
//! Callers may build their own catalog from a user-supplied map; it is
//! normalized the same way.

mod alphabet;
mod tones;

pub use alphabet::Alphabet;
pub use tones::{FskKind, ToneAlphabet};

use lazy_static::lazy_static;
use num_complex::Complex64;

use crate::error::{SynthError, SynthResult};
use alphabet::{cross, psk, real_levels, rectangular, square};

lazy_static! {
    static ref DEFAULT_CATALOG: SynthResult<ConstellationCatalog> =
        ConstellationCatalog::build_default();
    static ref DEFAULT_TONES: Vec<ToneAlphabet> = [2usize, 4, 8, 16]
        .iter()
        .flat_map(|&order| {
            [FskKind::Fsk, FskKind::Gfsk, FskKind::Msk, FskKind::Gmsk]
                .into_iter()
                .map(move |kind| ToneAlphabet::new(order, kind))
        })
        .collect();
}

/// Ordered set of normalized digital alphabets
#[derive(Debug, Clone)]
pub struct ConstellationCatalog {
    alphabets: Vec<Alphabet>,
}

impl ConstellationCatalog {
    /// The built-in catalog
    pub fn default_catalog() -> SynthResult<&'static ConstellationCatalog> {
        (*DEFAULT_CATALOG).as_ref().map_err(Clone::clone)
    }

    /// Build a catalog from a user map, preserving its order
    pub fn custom<I, S>(entries: I) -> SynthResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<Complex64>)>,
        S: Into<String>,
    {
        let alphabets = entries
            .into_iter()
            .map(|(name, points)| Alphabet::new(name.into().to_lowercase(), points).normalized())
            .collect::<SynthResult<Vec<_>>>()?;
        if alphabets.is_empty() {
            return Err(SynthError::EmptyConfiguration("constellation map"));
        }
        Ok(Self { alphabets })
    }

    fn build_default() -> SynthResult<Self> {
        let raw: Vec<(&str, Vec<Complex64>)> = vec![
            ("ook", real_levels(0.0, 2)),
            ("bpsk", real_levels(-1.0, 2)),
            ("4pam", real_levels(0.0, 4)),
            ("4ask", real_levels(-1.0, 4)),
            ("qpsk", square(2)),
            ("8pam", real_levels(0.0, 8)),
            ("8ask", real_levels(-1.0, 8)),
            ("8psk", psk(8)),
            ("16qam", square(4)),
            ("16pam", real_levels(0.0, 16)),
            ("16ask", real_levels(-1.0, 16)),
            ("16psk", psk(16)),
            ("32qam", rectangular(4, 8)),
            ("32qam_cross", cross(6)),
            ("32pam", real_levels(0.0, 32)),
            ("32ask", real_levels(-1.0, 32)),
            ("32psk", psk(32)),
            ("64qam", square(8)),
            ("64pam", real_levels(0.0, 64)),
            ("64ask", real_levels(-1.0, 64)),
            ("64psk", psk(64)),
            ("128qam_cross", cross(12)),
            ("256qam", square(16)),
            ("512qam_cross", cross(24)),
            ("1024qam", square(32)),
        ];
        Self::custom(raw)
    }

    /// Names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.alphabets.iter().map(|a| a.name())
    }

    pub fn len(&self) -> usize {
        self.alphabets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabets.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.alphabets.iter().any(|a| a.name() == name)
    }

    /// Normalized alphabet for `name`
    pub fn get(&self, name: &str) -> SynthResult<&Alphabet> {
        self.alphabets
            .iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| SynthError::UnknownModulation(name.to_string()))
    }
}

/// All built-in tone alphabets, ordered by order then family
pub fn tone_alphabets() -> &'static [ToneAlphabet] {
    &DEFAULT_TONES
}

/// Tone alphabet for an FSK-family name
pub fn tone_alphabet(name: &str) -> SynthResult<&'static ToneAlphabet> {
    DEFAULT_TONES
        .iter()
        .find(|t| t.name() == name)
        .ok_or_else(|| SynthError::UnknownModulation(name.to_string()))
}

/// True when `name` is a built-in FSK-family class
pub fn is_tone_name(name: &str) -> bool {
    DEFAULT_TONES.iter().any(|t| t.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Constellation;
    use crate::utils::mean_magnitude;

    #[test]
    fn test_default_catalog_complete() {
        let catalog = ConstellationCatalog::default_catalog().unwrap();
        assert_eq!(catalog.len(), 25);
        assert_eq!(catalog.names().next(), Some("ook"));
        assert_eq!(catalog.names().last(), Some("1024qam"));
    }

    #[test]
    fn test_every_alphabet_unit_mean_magnitude() {
        for alphabet in &ConstellationCatalog::default_catalog().unwrap().alphabets {
            let mean = mean_magnitude(alphabet.points());
            assert!((mean - 1.0).abs() < 1e-9, "{} mean magnitude {}", alphabet.name(), mean);
        }
    }

    #[test]
    fn test_orders_match_names() {
        let catalog = ConstellationCatalog::default_catalog().unwrap();
        let expect = [
            ("ook", 2usize),
            ("qpsk", 4),
            ("8psk", 8),
            ("32qam", 32),
            ("32qam_cross", 32),
            ("128qam_cross", 128),
            ("512qam_cross", 512),
            ("1024qam", 1024),
        ];
        for (name, order) in expect {
            let a = catalog.get(name).unwrap();
            assert_eq!(a.order(), order, "{}", name);
            assert_eq!(a.bits_per_symbol(), (order as f64).log2());
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = ConstellationCatalog::default_catalog().unwrap().get("17qam").unwrap_err();
        assert_eq!(err, SynthError::UnknownModulation("17qam".into()));
    }

    #[test]
    fn test_custom_catalog_normalized() {
        let catalog = ConstellationCatalog::custom(vec![(
            "Tri",
            vec![
                Complex64::new(2.0, 0.0),
                Complex64::new(-2.0, 0.0),
                Complex64::new(0.0, 2.0),
            ],
        )])
        .unwrap();
        let tri = catalog.get("tri").unwrap();
        assert!((mean_magnitude(tri.points()) - 1.0).abs() < 1e-12);
        assert!(ConstellationCatalog::custom(Vec::<(String, Vec<Complex64>)>::new()).is_err());
    }

    #[test]
    fn test_degenerate_entry_is_reported() {
        let err = ConstellationCatalog::custom(vec![
            ("bpsk", real_levels(-1.0, 2)),
            ("dead", vec![Complex64::new(0.0, 0.0); 4]),
        ])
        .unwrap_err();
        assert!(!err.is_configuration());
        assert!(err.to_string().contains("dead"));
    }

    #[test]
    fn test_tone_table() {
        assert_eq!(tone_alphabets().len(), 16);
        assert_eq!(tone_alphabet("16gmsk").unwrap().order(), 16);
        assert!(is_tone_name("2fsk"));
        assert!(!is_tone_name("qpsk"));
        assert!(tone_alphabet("32fsk").is_err());
    }
}
