//! Decoded image rasters accepted by the measurement pipelines

use crate::io::error::{MeasureError, Result, computation_error};
use image::{DynamicImage, GrayImage, RgbImage};
use ndarray::{Array2, Array3, ArrayD, Axis, Ix2, Ix3, Slice};

/// Borrowed view of an image's pixel layout
#[derive(Debug, Clone, Copy)]
pub enum Raster<'a> {
    /// Single-channel intensities, shape (H, W)
    Gray(&'a Array2<u8>),
    /// Interleaved RGB intensities, shape (H, W, 3)
    Rgb(&'a Array3<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pixels {
    Gray(Array2<u8>),
    Rgb(Array3<u8>),
}

/// Immutable 8-bit image, either grayscale or RGB
///
/// Construction normalizes the layout, so every pipeline stage can rely on
/// RGB data carrying exactly three channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Pixels,
}

impl Image {
    /// Wrap a grayscale array
    pub const fn from_gray(gray: Array2<u8>) -> Self {
        Self {
            pixels: Pixels::Gray(gray),
        }
    }

    /// Wrap an RGB array of shape (H, W, C) with at least three channels
    ///
    /// Channels past the third (alpha) are dropped.
    ///
    /// # Errors
    ///
    /// Returns `MalformedShape` if the last axis holds fewer than three channels
    pub fn from_rgb(rgb: Array3<u8>) -> Result<Self> {
        match rgb.dim().2 {
            3 => Ok(Self {
                pixels: Pixels::Rgb(rgb),
            }),
            channels if channels > 3 => Ok(Self {
                pixels: Pixels::Rgb(rgb.slice_axis(Axis(2), Slice::from(0..3)).to_owned()),
            }),
            _ => Err(MeasureError::MalformedShape {
                shape: rgb.shape().to_vec(),
            }),
        }
    }

    /// Wrap a rank-3 array by channel count
    ///
    /// One channel is grayscale, two are grayscale plus alpha, three or more
    /// are RGB with any alpha dropped.
    ///
    /// # Errors
    ///
    /// Returns `MalformedShape` if the channel axis is empty
    pub fn from_channels(pixels: Array3<u8>) -> Result<Self> {
        match pixels.dim().2 {
            0 => Err(MeasureError::MalformedShape {
                shape: pixels.shape().to_vec(),
            }),
            1 | 2 => Ok(Self::from_gray(pixels.index_axis(Axis(2), 0).to_owned())),
            _ => Self::from_rgb(pixels),
        }
    }

    /// Accept an array of any rank, failing fast on unsupported layouts
    ///
    /// Rank 2 is grayscale; rank 3 is interpreted by [`Image::from_channels`].
    ///
    /// # Errors
    ///
    /// Returns `MalformedShape` when the rank is not 2 or 3, or when a rank-3
    /// array has no channels
    pub fn from_array(array: ArrayD<u8>) -> Result<Self> {
        let shape = array.shape().to_vec();
        match array.ndim() {
            2 => array
                .into_dimensionality::<Ix2>()
                .map(Self::from_gray)
                .map_err(|_e| MeasureError::MalformedShape { shape }),
            3 => array
                .into_dimensionality::<Ix3>()
                .map_err(|_e| MeasureError::MalformedShape { shape })
                .and_then(Self::from_channels),
            _ => Err(MeasureError::MalformedShape { shape }),
        }
    }

    /// Convert a decoded image, keeping 8-bit luminance images single-channel
    ///
    /// # Errors
    ///
    /// Returns an error if the decoded buffer does not match its reported size
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        match image {
            DynamicImage::ImageLuma8(gray) => {
                let (width, height) = gray.dimensions();
                Array2::from_shape_vec((height as usize, width as usize), gray.into_raw())
                    .map(Self::from_gray)
                    .map_err(|e| computation_error("luminance buffer conversion", &e))
            }
            other => {
                let rgb = other.to_rgb8();
                let (width, height) = rgb.dimensions();
                let array =
                    Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())
                        .map_err(|e| computation_error("rgb buffer conversion", &e))?;
                Self::from_rgb(array)
            }
        }
    }

    /// Rebuild an `image` crate buffer for resampling
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel count does not fit the image dimensions
    pub fn to_dynamic(&self) -> Result<DynamicImage> {
        let (height, width) = self.dim();
        let (width, height) = (width as u32, height as u32);
        match &self.pixels {
            Pixels::Gray(gray) => {
                GrayImage::from_raw(width, height, gray.iter().copied().collect())
                    .map(DynamicImage::ImageLuma8)
                    .ok_or_else(|| computation_error("gray buffer rebuild", &"size mismatch"))
            }
            Pixels::Rgb(rgb) => RgbImage::from_raw(width, height, rgb.iter().copied().collect())
                .map(DynamicImage::ImageRgb8)
                .ok_or_else(|| computation_error("rgb buffer rebuild", &"size mismatch")),
        }
    }

    /// Borrow the pixel layout
    pub const fn raster(&self) -> Raster<'_> {
        match &self.pixels {
            Pixels::Gray(gray) => Raster::Gray(gray),
            Pixels::Rgb(rgb) => Raster::Rgb(rgb),
        }
    }

    /// Spatial extent as (height, width)
    pub fn dim(&self) -> (usize, usize) {
        match &self.pixels {
            Pixels::Gray(gray) => gray.dim(),
            Pixels::Rgb(rgb) => {
                let (h, w, _) = rgb.dim();
                (h, w)
            }
        }
    }

    /// Number of intensity channels (1 or 3)
    pub const fn channels(&self) -> usize {
        match &self.pixels {
            Pixels::Gray(_) => 1,
            Pixels::Rgb(_) => 3,
        }
    }

    /// True when either side is zero pixels long
    pub fn is_empty(&self) -> bool {
        let (h, w) = self.dim();
        h == 0 || w == 0
    }
}
