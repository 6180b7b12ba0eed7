//! Time-varying realism: on/off bursts with persistent pilots and resource blocks

use log::trace;
use num_complex::Complex64;
use rand::seq::{index, SliceRandom};
use rand::Rng;

use super::grid::SubcarrierGrid;
use super::TimeVaryingRealism;
use crate::rng::{randint, uniform};

/// Burst lengths, in OFDM symbols
const BURST_DURATIONS: [usize; 3] = [1, 2, 4];

/// Pilot and resource-block counts
const MIN_PILOTS: usize = 4;
const RESOURCE_BLOCKS: (usize, usize) = (2, 16);

/// Burst pattern applied to a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstPattern {
    /// Symbols per on/off toggle
    pub burst_dur: usize,
    /// Whether rows start in the "on" state before the first toggle
    pub original_on: bool,
}

impl Default for BurstPattern {
    fn default() -> Self {
        Self {
            burst_dur: 1,
            original_on: false,
        }
    }
}

/// Apply bursts, then restore pilots and resource blocks from the original grid
///
/// `Off` leaves the grid untouched and returns the default pattern.
pub fn apply<R: Rng + ?Sized>(
    grid: &mut SubcarrierGrid,
    policy: TimeVaryingRealism,
    rng: &mut R,
) -> BurstPattern {
    let cols = grid.cols();
    let (region_start, region_stop) = match policy {
        TimeVaryingRealism::Off => return BurstPattern::default(),
        TimeVaryingRealism::FullBursty => (0, cols),
        TimeVaryingRealism::PartialBursty => {
            let start = uniform(rng, 0.0, 0.9);
            let dur = (1.0 - start).min(uniform(rng, 0.25, 1.0));
            let start = (start * cols as f64 / 4.0).floor() as usize;
            let dur = (dur * cols as f64 / 4.0).floor() as usize;
            (start, start + dur)
        }
    };

    let original = grid.clone();
    let pattern = BurstPattern {
        burst_dur: *BURST_DURATIONS.choose(rng).unwrap_or(&1),
        original_on: rng.gen::<f64>() <= 0.5,
    };

    for row in 0..grid.rows() {
        let mut on = pattern.original_on;
        for t in 0..cols {
            if t % pattern.burst_dur == 0 {
                on = !on;
            }
            if !on && t >= region_start && t <= region_stop {
                grid.set(row, t, Complex64::new(0.0, 0.0));
            }
        }
    }

    let nsc = grid.num_subcarriers();

    // Pilots stay on for the whole grid
    let num_pilots = randint(rng, MIN_PILOTS, nsc / 8).min(nsc);
    for sc in index::sample(rng, nsc, num_pilots) {
        let row = grid.active_row(sc);
        grid.restore_block(&original, row..row + 1, 0..cols);
    }

    let num_blocks = randint(rng, RESOURCE_BLOCKS.0, RESOURCE_BLOCKS.1);
    for _ in 0..num_blocks {
        let start = uniform(rng, 0.0, 0.9);
        let dur = uniform(rng, 0.05, 1.0 - start);
        let col_start = ((start * cols as f64) as usize).min(cols);
        let col_stop = (col_start + (dur * cols as f64 / 4.0).floor() as usize).min(cols);

        let low = randint(rng, 0, nsc.saturating_sub(4));
        let width = randint(rng, 1, nsc / 8);
        let high = (low + width).min(nsc);
        let rows = grid.active_row(low)..grid.active_row(high);
        grid.restore_block(&original, rows, col_start..col_stop);
    }

    trace!(
        "{:?}: region {}..={}, {} pilots, {} blocks, burst {:?}",
        policy,
        region_start,
        region_stop,
        num_pilots,
        num_blocks,
        pattern
    );
    pattern
}
