//! Working-resolution resampling
//!
//! Both pipelines run on bounded images: large inputs are reduced before
//! measurement, and the Hilbert pipeline additionally needs an exact
//! power-of-two square.

use crate::imaging::raster::Image;
use crate::io::error::{Result, computation_error};
use image::GrayImage;
use image::imageops::{self, FilterType};
use log::debug;
use ndarray::Array2;
use std::borrow::Cow;

/// Resampling filter used everywhere an image changes size
pub const RESAMPLING_FILTER: FilterType = FilterType::Lanczos3;

/// Target size keeping the aspect ratio with the longest side at `max_dimension`
pub fn bounded_size(height: usize, width: usize, max_dimension: u32) -> Option<(u32, u32)> {
    let longest = height.max(width);
    let max_dimension = max_dimension.max(1);
    if longest <= max_dimension as usize {
        return None;
    }
    let scale = f64::from(max_dimension) / longest as f64;
    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);
    Some((new_width, new_height))
}

/// Downscale an image so its longest side does not exceed `max_dimension`
///
/// Images already within bounds are borrowed unchanged.
///
/// # Errors
///
/// Returns an error if the pixel buffer cannot be rebuilt after resampling
pub fn bound_working_size(image: &Image, max_dimension: u32) -> Result<Cow<'_, Image>> {
    let (height, width) = image.dim();
    let Some((new_width, new_height)) = bounded_size(height, width, max_dimension) else {
        return Ok(Cow::Borrowed(image));
    };

    debug!("downscaling {width}x{height} to working size {new_width}x{new_height}");
    let resized = image
        .to_dynamic()?
        .resize_exact(new_width, new_height, RESAMPLING_FILTER);
    Image::from_dynamic(resized).map(Cow::Owned)
}

/// Resample floating-point intensities to a `size`×`size` square
///
/// Intensities are truncated to 8 bits before filtering, matching the usual
/// array-to-image round trip.
///
/// # Errors
///
/// Returns an error if the input is empty or the buffers cannot be rebuilt
pub fn resize_square(gray: &Array2<f64>, size: u32) -> Result<Array2<f64>> {
    let (height, width) = gray.dim();
    if height == 0 || width == 0 {
        return Err(computation_error(
            "square resize",
            &format!("cannot resample an empty {width}x{height} image"),
        ));
    }

    let bytes: Vec<u8> = gray.iter().map(|&v| v.clamp(0.0, 255.0) as u8).collect();
    let source = GrayImage::from_raw(width as u32, height as u32, bytes)
        .ok_or_else(|| computation_error("square resize", &"size mismatch"))?;

    let resized = imageops::resize(&source, size, size, RESAMPLING_FILTER);
    Array2::from_shape_vec((size as usize, size as usize), resized.into_raw())
        .map(|pixels| pixels.mapv(f64::from))
        .map_err(|e| computation_error("square resize", &e))
}
