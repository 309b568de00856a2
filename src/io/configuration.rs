//! Measurement constants and runtime configuration defaults

// Edge extraction
/// Lower hysteresis threshold of the Canny detector (L1 gradient magnitude)
pub const CANNY_LOW_THRESHOLD: i32 = 50;
/// Upper hysteresis threshold of the Canny detector (L1 gradient magnitude)
pub const CANNY_HIGH_THRESHOLD: i32 = 150;
/// Pixel value written for edge pixels in a binary edge map
pub const EDGE_VALUE: u8 = 255;

// Box counting
/// Geometric series of box sizes used for the log-log regression
pub const BOX_SIZES: [usize; 6] = [2, 4, 8, 16, 32, 64];

/// Fractal dimension reported when too few scales carry any edge
pub const DEGENERATE_DIMENSION: f64 = 1.0;
/// Lower clamp of the fractal dimension (a line)
pub const MIN_DIMENSION: f64 = 1.0;
/// Upper clamp of the fractal dimension (a filled plane)
pub const MAX_DIMENSION: f64 = 2.0;

// Lacunarity
/// Side length of the gliding box
pub const LACUNARITY_BOX_SIZE: usize = 32;
/// Step between gliding box placements
pub const LACUNARITY_STRIDE: usize = 8;
/// Pixels brighter than this count towards box mass
pub const LACUNARITY_MASS_THRESHOLD: u8 = 128;

// Information pipeline
/// Default Bandt-Pompe embedding dimension
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 5;
/// Largest supported embedding dimension (7! = 5040 patterns)
pub const MAX_EMBEDDING_DIMENSION: usize = 7;
/// Smallest meaningful embedding dimension
pub const MIN_EMBEDDING_DIMENSION: usize = 2;
/// Default sample delay between pattern elements
pub const DEFAULT_DELAY: usize = 1;
/// Default side length of the square image walked by the Hilbert curve
pub const DEFAULT_RESIZE_TARGET: u32 = 512;
/// Largest accepted Hilbert resize target
pub const MAX_RESIZE_TARGET: u32 = 4096;

// Safety limit on working resolution
/// Longest side an image is reduced to before entering either pipeline
pub const DEFAULT_MAX_WORKING_DIMENSION: u32 = 1024;

// Combined score
/// Weight of the normalized fractal dimension in the combined score
pub const COMBINED_FD_WEIGHT: f64 = 0.7;
/// Weight of lacunarity in the combined score
pub const COMBINED_LACUNARITY_WEIGHT: f64 = 0.3;

// Output settings
/// File extensions accepted in batch mode
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Decimal places written for every metric in CSV output
pub const CSV_PRECISION: usize = 4;
