//! Error types for measurement, decoding and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all measurement operations
///
/// Degenerate-but-valid textures (no edges, empty mass field, undersized
/// images) are not errors; the estimators return sentinel values for those.
#[derive(Debug)]
pub enum MeasureError {
    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Image array rank is not supported
    ///
    /// Only rank 2 (grayscale) and rank 3 (channels last) are accepted; a
    /// rank-3 array must hold at least one channel. Anything else is a
    /// decoding contract violation.
    MalformedShape {
        /// Shape of the rejected array
        shape: Vec<usize>,
    },

    /// Measurement parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write measurement rows as CSV
    CsvExport {
        /// Destination of the export
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::MalformedShape { shape } => {
                write!(
                    f,
                    "Malformed image shape {shape:?}: expected rank 2 or 3"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::CsvExport { path, source } => {
                write!(f, "Failed to export CSV to '{}': {source}", path.display())
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MeasureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::CsvExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for measurement results
pub type Result<T> = std::result::Result<T, MeasureError>;

impl From<image::ImageError> for MeasureError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MeasureError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<csv::Error> for MeasureError {
    fn from(err: csv::Error) -> Self {
        Self::CsvExport {
            path: PathBuf::from("<stream>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MeasureError {
    MeasureError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MeasureError {
    MeasureError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
