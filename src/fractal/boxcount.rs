//! Occupied-cell counting over binary edge maps
//!
//! The map is partitioned into non-overlapping `k`×`k` cells covering the
//! largest region whose sides are multiples of `k`; trailing rows and columns
//! on the bottom and right edges are discarded. A cell is occupied when any
//! pixel inside it is non-zero.
//!
//! Counting is a single row-major pass that marks cell occupancy in a bitset,
//! so the cost is O(H·W) regardless of `k`.

use bitvec::prelude::*;
use ndarray::Array2;

/// One sample of the box-counting scale series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalePoint {
    /// Side length of the counting cells in pixels
    pub box_size: usize,
    /// Number of cells containing at least one edge pixel
    pub count: usize,
}

/// Box counts ordered by increasing box size
pub type ScaleSeries = Vec<ScalePoint>;

/// Count cells of side `box_size` that contain at least one non-zero pixel
///
/// Returns 0 when `box_size` is zero or larger than either image side.
pub fn count_occupied(edges: &Array2<u8>, box_size: usize) -> usize {
    if box_size == 0 {
        return 0;
    }

    let (h, w) = edges.dim();
    let cell_rows = h / box_size;
    let cell_cols = w / box_size;
    if cell_rows == 0 || cell_cols == 0 {
        return 0;
    }

    let mut occupied = bitvec![0; cell_rows * cell_cols];

    for (r, row) in edges.rows().into_iter().take(cell_rows * box_size).enumerate() {
        let base = (r / box_size) * cell_cols;
        for (c, &value) in row.iter().take(cell_cols * box_size).enumerate() {
            if value > 0 {
                occupied.set(base + c / box_size, true);
            }
        }
    }

    occupied.count_ones()
}

/// Count occupied cells at every box size, preserving the given order
pub fn scale_series(edges: &Array2<u8>, box_sizes: &[usize]) -> ScaleSeries {
    box_sizes
        .iter()
        .map(|&box_size| ScalePoint {
            box_size,
            count: count_occupied(edges, box_size),
        })
        .collect()
}
