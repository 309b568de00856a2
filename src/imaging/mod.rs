//! Image representation and pixel-level preprocessing
//!
//! This module contains everything that runs before a metric is computed:
//! - The validated `Image` raster
//! - Grayscale conversion (two luma conventions)
//! - Canny edge extraction
//! - Working-resolution resampling

/// Canny edge extraction
pub mod edges;
/// RGB to luminance conversion
pub mod grayscale;
/// Validated 8-bit image rasters
pub mod raster;
/// Downscaling and square resampling
pub mod resample;

pub use raster::{Image, Raster};
