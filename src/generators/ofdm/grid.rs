//! Subcarrier × time-symbol grid and its conversion to time domain

use std::sync::Arc;

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

use crate::constellations::Alphabet;
use crate::traits::Constellation;

/// Frequency-domain resource grid
///
/// `2·N` rows (N active subcarriers centered between `N/2` zero rows on
/// each side) by `cols` time symbols. Stored column-major so each OFDM
/// symbol is a contiguous slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcarrierGrid {
    num_subcarriers: usize,
    cols: usize,
    cells: Vec<Complex64>,
}

impl SubcarrierGrid {
    pub fn zeros(num_subcarriers: usize, cols: usize) -> Self {
        Self {
            num_subcarriers,
            cols,
            cells: vec![Complex64::new(0.0, 0.0); 2 * num_subcarriers * cols],
        }
    }

    /// Fill active rows from per-subcarrier symbol sources
    ///
    /// `symbol(sc, t)` returns the point for active subcarrier `sc` at time
    /// `t`, both zero-based.
    pub fn from_fn<F>(num_subcarriers: usize, cols: usize, mut symbol: F) -> Self
    where
        F: FnMut(usize, usize) -> Complex64,
    {
        let mut grid = Self::zeros(num_subcarriers, cols);
        let offset = num_subcarriers / 2;
        for sc in 0..num_subcarriers {
            for t in 0..cols {
                grid.set(sc + offset, t, symbol(sc, t));
            }
        }
        grid
    }

    pub fn num_subcarriers(&self) -> usize {
        self.num_subcarriers
    }

    /// FFT size, equal to the row count
    pub fn fft_size(&self) -> usize {
        2 * self.num_subcarriers
    }

    pub fn rows(&self) -> usize {
        self.fft_size()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row index of the DC bin
    pub fn dc_row(&self) -> usize {
        self.num_subcarriers
    }

    /// Row index of active subcarrier `sc`
    pub fn active_row(&self, sc: usize) -> usize {
        sc + self.num_subcarriers / 2
    }

    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.cells[col * self.rows() + row]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        let rows = self.rows();
        self.cells[col * rows + row] = value;
    }

    pub fn column(&self, col: usize) -> &[Complex64] {
        let rows = self.rows();
        &self.cells[col * rows..(col + 1) * rows]
    }

    pub fn zero_row(&mut self, row: usize) {
        for col in 0..self.cols {
            self.set(row, col, Complex64::new(0.0, 0.0));
        }
    }

    /// Copy `rows × cols` from `other` into the same positions of `self`
    pub fn restore_block(
        &mut self,
        other: &SubcarrierGrid,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
    ) {
        for col in cols {
            for row in rows.clone() {
                self.set(row, col, other.get(row, col));
            }
        }
    }

    pub fn is_row_zero(&self, row: usize) -> bool {
        (0..self.cols).all(|col| self.get(row, col) == Complex64::new(0.0, 0.0))
    }
}

/// Draw symbols on `num_subcarriers × cols`, every subcarrier sharing `alphabet`
pub fn fixed_alphabet_grid<F>(
    alphabet: &Alphabet,
    num_subcarriers: usize,
    cols: usize,
    mut draw: F,
) -> SubcarrierGrid
where
    F: FnMut(usize) -> usize,
{
    let order = alphabet.order();
    SubcarrierGrid::from_fn(num_subcarriers, cols, |_, _| alphabet.point(draw(order)))
}

/// Draw symbols with one alphabet per subcarrier
pub fn mixed_alphabet_grid<F>(
    alphabets: &[&Alphabet],
    num_subcarriers: usize,
    cols: usize,
    mut draw: F,
) -> SubcarrierGrid
where
    F: FnMut(usize) -> usize,
{
    SubcarrierGrid::from_fn(num_subcarriers, cols, |sc, _| {
        let alphabet = alphabets[sc];
        alphabet.point(draw(alphabet.order()))
    })
}

/// Per-column IFFT with cyclic prefix
///
/// Each column is `ifftshift`ed, inverse-transformed with `1/N` scaling
/// and prefixed with its last `cp_len` samples. Returns one
/// `cp_len + N`-sample symbol per column.
pub struct SymbolModulator {
    ifft: Arc<dyn Fft<f64>>,
    fft_size: usize,
    cp_len: usize,
}

impl SymbolModulator {
    pub fn new(fft_size: usize, cp_len: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            ifft: planner.plan_fft_inverse(fft_size),
            fft_size,
            cp_len,
        }
    }

    pub fn symbol_len(&self) -> usize {
        self.fft_size + self.cp_len
    }

    pub fn modulate(&self, grid: &SubcarrierGrid) -> Vec<Vec<Complex64>> {
        let n = self.fft_size;
        let half = n / 2;
        let scale = 1.0 / n as f64;

        (0..grid.cols())
            .map(|col| {
                let column = grid.column(col);
                let mut buf: Vec<Complex64> = (0..n).map(|i| column[(i + half) % n]).collect();
                self.ifft.process(&mut buf);

                let mut symbol = Vec::with_capacity(self.symbol_len());
                symbol.extend_from_slice(&buf[n - self.cp_len..]);
                symbol.extend_from_slice(&buf);
                for s in symbol.iter_mut() {
                    *s = *s * scale;
                }
                symbol
            })
            .collect()
    }
}
