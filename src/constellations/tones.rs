//! Frequency-tone alphabets for the FSK family

use crate::utils::linspace;

/// Continuous-phase modulation family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FskKind {
    Fsk,
    Gfsk,
    Msk,
    Gmsk,
}

impl FskKind {
    /// Fixed modulation index for the family
    pub fn modulation_index(&self) -> f64 {
        match self {
            // Bluetooth-style
            FskKind::Gfsk => 0.32,
            FskKind::Msk | FskKind::Gmsk => 0.5,
            FskKind::Fsk => 1.0,
        }
    }

    /// Whether tones pass through a Gaussian filter before integration
    pub fn is_gaussian(&self) -> bool {
        matches!(self, FskKind::Gfsk | FskKind::Gmsk)
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            FskKind::Fsk => "fsk",
            FskKind::Gfsk => "gfsk",
            FskKind::Msk => "msk",
            FskKind::Gmsk => "gmsk",
        }
    }
}

/// Tone alphabet: `order` offsets evenly spread over (-1, 1)
#[derive(Debug, Clone, PartialEq)]
pub struct ToneAlphabet {
    name: String,
    kind: FskKind,
    tones: Vec<f64>,
}

impl ToneAlphabet {
    pub fn new(order: usize, kind: FskKind) -> Self {
        let edge = 1.0 / order as f64;
        Self {
            name: format!("{}{}", order, kind.suffix()),
            kind,
            tones: linspace(-1.0 + edge, 1.0 - edge, order),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FskKind {
        self.kind
    }

    pub fn tones(&self) -> &[f64] {
        &self.tones
    }

    pub fn order(&self) -> usize {
        self.tones.len()
    }

    pub fn bits_per_symbol(&self) -> f64 {
        (self.order() as f64).log2()
    }
}
