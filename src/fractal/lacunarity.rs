//! Gliding-box lacunarity of thresholded grayscale mass
//!
//! A fixed box glides over the image; at each placement the mass is the
//! number of pixels brighter than the threshold. Lacunarity is the squared
//! coefficient of variation of those masses, halved and capped at 1 so the
//! usual range of natural textures lands in [0, 1].

use crate::io::configuration::{
    LACUNARITY_BOX_SIZE, LACUNARITY_MASS_THRESHOLD, LACUNARITY_STRIDE,
};
use ndarray::Array2;

/// Gliding box geometry and mass threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlidingBox {
    /// Box side length in pixels
    pub size: usize,
    /// Step between placements along both axes
    pub stride: usize,
    /// Pixels strictly above this value contribute mass
    pub threshold: u8,
}

impl Default for GlidingBox {
    fn default() -> Self {
        Self {
            size: LACUNARITY_BOX_SIZE,
            stride: LACUNARITY_STRIDE,
            threshold: LACUNARITY_MASS_THRESHOLD,
        }
    }
}

// Summed-area table of mass indicators, one row and column of zero padding
fn mass_integral(gray: &Array2<u8>, threshold: u8) -> Array2<u32> {
    let (h, w) = gray.dim();
    let mut integral = Array2::<u32>::zeros((h + 1, w + 1));
    for y in 0..h {
        let mut row_sum = 0u32;
        for x in 0..w {
            if gray.get((y, x)).is_some_and(|&v| v > threshold) {
                row_sum += 1;
            }
            let above = integral.get((y, x + 1)).copied().unwrap_or(0);
            if let Some(cell) = integral.get_mut((y + 1, x + 1)) {
                *cell = above + row_sum;
            }
        }
    }
    integral
}

/// Mass of every box placement in row-major order
///
/// Placements start at offsets `0, stride, 2·stride, …` strictly below
/// `side - size`, so an image no larger than the box yields no placements.
pub fn box_masses(gray: &Array2<u8>, gliding: GlidingBox) -> Vec<u32> {
    let (h, w) = gray.dim();
    let size = gliding.size;
    let stride = gliding.stride.max(1);
    if size == 0 || h <= size || w <= size {
        return Vec::new();
    }

    let integral = mass_integral(gray, gliding.threshold);
    let at = |y: usize, x: usize| integral.get((y, x)).copied().unwrap_or(0);

    let mut masses = Vec::new();
    for top in (0..h - size).step_by(stride) {
        for left in (0..w - size).step_by(stride) {
            let bottom = top + size;
            let right = left + size;
            masses.push(at(bottom, right) + at(top, left) - at(top, right) - at(bottom, left));
        }
    }
    masses
}

/// Lacunarity of a list of box masses
///
/// Returns 0 for an empty list or a zero mean mass.
pub fn lacunarity_from_masses(masses: &[u32]) -> f64 {
    if masses.is_empty() {
        return 0.0;
    }

    let n = masses.len() as f64;
    let mean = masses.iter().map(|&m| f64::from(m)).sum::<f64>() / n;
    if mean <= 0.0 {
        return 0.0;
    }

    let variance = masses
        .iter()
        .map(|&m| (f64::from(m) - mean).powi(2))
        .sum::<f64>()
        / n;

    let coefficient = variance.sqrt() / mean;
    (coefficient * coefficient / 2.0).min(1.0)
}

/// Lacunarity with the default 32×32 box, stride 8 and threshold 128
pub fn lacunarity(gray: &Array2<u8>) -> f64 {
    lacunarity_from_masses(&box_masses(gray, GlidingBox::default()))
}
