//! Hilbert-curve linearization of square images
//!
//! Walking the image along a Hilbert curve keeps consecutive samples
//! spatially adjacent, so ordinal statistics of the 1D sequence reflect 2D
//! texture rather than raster scan-line artifacts.

use crate::imaging::resample::resize_square;
use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;

/// Map a distance along the curve to `(x, y)` on a `side`×`side` grid
///
/// `side` must be a power of two; `d` ranges over `0..side²`.
pub const fn d2xy(side: usize, d: usize) -> (usize, usize) {
    let mut x = 0;
    let mut y = 0;
    let mut t = d;
    let mut s = 1;
    while s < side {
        let rx = 1 & (t / 2);
        let ry = 1 & (t ^ rx);
        if ry == 0 {
            if rx == 1 {
                x = s - 1 - x;
                y = s - 1 - y;
            }
            std::mem::swap(&mut x, &mut y);
        }
        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }
    (x, y)
}

/// Curve coordinates `(x, y)` for every distance in traversal order
pub fn curve_coordinates(side: usize) -> Vec<(usize, usize)> {
    (0..side * side).map(|d| d2xy(side, d)).collect()
}

/// Read a square power-of-two image in Hilbert order
///
/// Sample `i` is the pixel at row `y`, column `x` of the `i`-th curve point.
///
/// # Errors
///
/// Returns `InvalidParameter` if the image is not a non-empty power-of-two
/// square
pub fn linearize(square: &Array2<f64>) -> Result<Vec<f64>> {
    let (h, w) = square.dim();
    if h != w || !h.is_power_of_two() {
        return Err(invalid_parameter(
            "image",
            &format!("{w}x{h}"),
            &"Hilbert traversal needs a power-of-two square",
        ));
    }

    Ok(curve_coordinates(h)
        .into_iter()
        .map(|(x, y)| square.get((y, x)).copied().unwrap_or(0.0))
        .collect())
}

/// Resample grayscale intensities to `size`×`size` and linearize them
///
/// # Errors
///
/// Returns an error if `size` is not a power of two or resampling fails
pub fn hilbert_sequence(gray: &Array2<f64>, size: u32) -> Result<Vec<f64>> {
    if !size.is_power_of_two() {
        return Err(invalid_parameter(
            "resize_target",
            &size,
            &"must be a power of two",
        ));
    }
    let square = resize_square(gray, size)?;
    linearize(&square)
}
