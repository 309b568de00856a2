//! Geometric complexity of edge maps and grayscale mass fields
//!
//! This module contains the fractal pipeline estimators:
//! - Occupied-cell box counting over binary edge maps
//! - Log-log regression into a clamped fractal dimension
//! - Gliding-box lacunarity

/// Occupied-cell counting at a single box size
pub mod boxcount;
/// Fractal dimension from a series of box counts
pub mod dimension;
/// Gliding-box lacunarity
pub mod lacunarity;

pub use dimension::FractalResult;
