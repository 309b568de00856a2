//! Two-threshold Canny edge extraction producing binary edge maps
//!
//! Follows the classic non-blurred variant:
//!
//! - 3×3 Sobel derivatives with replicated borders.
//! - L1 gradient magnitude `|gx| + |gy|`.
//! - Non-maximum suppression along one of four directions chosen by
//!   fixed-point tangent comparison (22.5° / 67.5° sectors). Magnitudes
//!   outside the image read as zero.
//! - Hysteresis: pixels above `high` seed edges, which grow through
//!   8-connected pixels above `low`.
//!
//! Complexity: O(W·H) time, one `i32` buffer per derivative plus two bitsets.

use crate::io::configuration::{CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD, EDGE_VALUE};
use bitvec::prelude::*;
use ndarray::Array2;

// tan(22.5°) in Q15
const TAN_22_5_Q15: i64 = 13_573;
const Q15_SHIFT: u32 = 15;

/// Hysteresis thresholds applied to the L1 gradient magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannyThresholds {
    /// Weak edges must exceed this magnitude
    pub low: i32,
    /// Strong edges must exceed this magnitude
    pub high: i32,
}

impl Default for CannyThresholds {
    fn default() -> Self {
        Self {
            low: CANNY_LOW_THRESHOLD,
            high: CANNY_HIGH_THRESHOLD,
        }
    }
}

/// Per-pixel Sobel derivatives and L1 magnitude
#[derive(Debug, Clone)]
pub struct Gradients {
    /// Horizontal derivative
    pub dx: Array2<i32>,
    /// Vertical derivative
    pub dy: Array2<i32>,
    /// `|dx| + |dy|`
    pub magnitude: Array2<i32>,
}

#[inline]
fn clamped(gray: &Array2<u8>, y: isize, x: isize) -> i32 {
    let (h, w) = gray.dim();
    let yy = y.clamp(0, h as isize - 1) as usize;
    let xx = x.clamp(0, w as isize - 1) as usize;
    gray.get((yy, xx)).copied().map_or(0, i32::from)
}

#[inline]
fn magnitude_at(magnitude: &Array2<i32>, y: isize, x: isize) -> i32 {
    if y < 0 || x < 0 {
        return 0;
    }
    magnitude.get((y as usize, x as usize)).copied().unwrap_or(0)
}

/// Sobel derivatives with replicated borders
pub fn sobel_gradients(gray: &Array2<u8>) -> Gradients {
    let (h, w) = gray.dim();
    let mut dx = Array2::<i32>::zeros((h, w));
    let mut dy = Array2::<i32>::zeros((h, w));
    let mut magnitude = Array2::<i32>::zeros((h, w));

    for y in 0..h as isize {
        for x in 0..w as isize {
            let top_left = clamped(gray, y - 1, x - 1);
            let top = clamped(gray, y - 1, x);
            let top_right = clamped(gray, y - 1, x + 1);
            let left = clamped(gray, y, x - 1);
            let right = clamped(gray, y, x + 1);
            let bottom_left = clamped(gray, y + 1, x - 1);
            let bottom = clamped(gray, y + 1, x);
            let bottom_right = clamped(gray, y + 1, x + 1);

            let gx = (top_right + 2 * right + bottom_right) - (top_left + 2 * left + bottom_left);
            let gy = (bottom_left + 2 * bottom + bottom_right) - (top_left + 2 * top + top_right);

            let index = (y as usize, x as usize);
            if let Some(v) = dx.get_mut(index) {
                *v = gx;
            }
            if let Some(v) = dy.get_mut(index) {
                *v = gy;
            }
            if let Some(v) = magnitude.get_mut(index) {
                *v = gx.abs() + gy.abs();
            }
        }
    }

    Gradients { dx, dy, magnitude }
}

// Keeps a pixel only if its magnitude dominates both neighbours across the edge
fn is_local_maximum(gradients: &Gradients, y: isize, x: isize) -> bool {
    let index = (y as usize, x as usize);
    let m = gradients.magnitude.get(index).copied().unwrap_or(0);
    let gx = i64::from(gradients.dx.get(index).copied().unwrap_or(0));
    let gy = i64::from(gradients.dy.get(index).copied().unwrap_or(0));
    let mag = &gradients.magnitude;

    let xs = gx.abs();
    let ys = gy.abs() << Q15_SHIFT;
    let tan22 = xs * TAN_22_5_Q15;

    if ys < tan22 {
        m > magnitude_at(mag, y, x - 1) && m >= magnitude_at(mag, y, x + 1)
    } else {
        let tan67 = tan22 + (xs << (Q15_SHIFT + 1));
        if ys > tan67 {
            m > magnitude_at(mag, y - 1, x) && m >= magnitude_at(mag, y + 1, x)
        } else {
            let s = if (gx ^ gy) < 0 { -1 } else { 1 };
            m > magnitude_at(mag, y - 1, x - s) && m > magnitude_at(mag, y + 1, x + s)
        }
    }
}

/// Binary edge map with values {0, 255} and the same extent as the input
pub fn canny(gray: &Array2<u8>, thresholds: CannyThresholds) -> Array2<u8> {
    let (h, w) = gray.dim();
    if h == 0 || w == 0 {
        return Array2::zeros((h, w));
    }

    let gradients = sobel_gradients(gray);

    let mut weak = bitvec![0; h * w];
    let mut edge = bitvec![0; h * w];
    let mut stack = Vec::new();

    for y in 0..h as isize {
        for x in 0..w as isize {
            let flat = y as usize * w + x as usize;
            let m = gradients
                .magnitude
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or(0);
            if m <= thresholds.low || !is_local_maximum(&gradients, y, x) {
                continue;
            }
            if m > thresholds.high {
                edge.set(flat, true);
                stack.push((y, x));
            } else {
                weak.set(flat, true);
            }
        }
    }

    while let Some((y, x)) = stack.pop() {
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if ny < 0 || nx < 0 || ny >= h as isize || nx >= w as isize {
                    continue;
                }
                let flat = ny as usize * w + nx as usize;
                if weak.get(flat).as_deref() == Some(&true) {
                    weak.set(flat, false);
                    edge.set(flat, true);
                    stack.push((ny, nx));
                }
            }
        }
    }

    let mut map = Array2::<u8>::zeros((h, w));
    for flat in edge.iter_ones() {
        if let Some(v) = map.get_mut((flat / w, flat % w)) {
            *v = EDGE_VALUE;
        }
    }
    map
}

/// Canny with the default 50/150 thresholds
pub fn extract_edges(gray: &Array2<u8>) -> Array2<u8> {
    canny(gray, CannyThresholds::default())
}
