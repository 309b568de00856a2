//! RGB to luminance conversion
//!
//! Two conventions coexist because the two pipelines were calibrated against
//! different conversions:
//!
//! - [`luma_fixed_point`] reproduces the 14-bit fixed-point integer path used
//!   by common computer-vision libraries for 8-bit RGB input. The result is
//!   rounded back to `u8`, which is what the edge detector consumes.
//! - [`luma_weighted`] applies `0.299 R + 0.587 G + 0.114 B` in `f64` with no
//!   rounding, which is what the Hilbert pipeline consumes.
//!
//! The weights are the same BT.601 luma coefficients, but the outputs are not
//! bit-identical: the fixed-point path rounds to the nearest integer while the
//! floating path keeps the fraction.

use crate::imaging::raster::{Image, Raster};
use ndarray::{Array2, Axis, Zip};

const LUMA_SHIFT: u32 = 14;
const RED_FIXED: u32 = 4899;
const GREEN_FIXED: u32 = 9617;
const BLUE_FIXED: u32 = 1868;

/// Red weight of the floating-point luma conversion
pub const RED_WEIGHT: f64 = 0.299;
/// Green weight of the floating-point luma conversion
pub const GREEN_WEIGHT: f64 = 0.587;
/// Blue weight of the floating-point luma conversion
pub const BLUE_WEIGHT: f64 = 0.114;

/// Fixed-point luma of a single pixel, rounded to nearest
#[inline]
pub const fn fixed_point_pixel(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 * RED_FIXED + g as u32 * GREEN_FIXED + b as u32 * BLUE_FIXED;
    ((sum + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

/// Floating-point luma of a single pixel
// Summed left to right without fused multiply-add so values match the
// reference weighting bit for bit
#[allow(clippy::suboptimal_flops)]
#[inline]
pub fn weighted_pixel(r: u8, g: u8, b: u8) -> f64 {
    RED_WEIGHT * f64::from(r) + GREEN_WEIGHT * f64::from(g) + BLUE_WEIGHT * f64::from(b)
}

/// Grayscale image for the edge pipeline
///
/// Grayscale input is returned as an owned copy of the original intensities.
pub fn luma_fixed_point(image: &Image) -> Array2<u8> {
    match image.raster() {
        Raster::Gray(gray) => gray.clone(),
        Raster::Rgb(rgb) => Zip::from(rgb.index_axis(Axis(2), 0))
            .and(rgb.index_axis(Axis(2), 1))
            .and(rgb.index_axis(Axis(2), 2))
            .map_collect(|&r, &g, &b| fixed_point_pixel(r, g, b)),
    }
}

/// Grayscale image for the information pipeline
///
/// Grayscale input is returned unchanged apart from the widening to `f64`.
pub fn luma_weighted(image: &Image) -> Array2<f64> {
    match image.raster() {
        Raster::Gray(gray) => gray.mapv(f64::from),
        Raster::Rgb(rgb) => Zip::from(rgb.index_axis(Axis(2), 0))
            .and(rgb.index_axis(Axis(2), 1))
            .and(rgb.index_axis(Axis(2), 2))
            .map_collect(|&r, &g, &b| weighted_pixel(r, g, b)),
    }
}
