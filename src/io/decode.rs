//! Image decoding and batch target discovery

use crate::imaging::raster::Image;
use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{MeasureError, Result, invalid_parameter};
use log::debug;
use std::path::{Path, PathBuf};

/// Decode a JPG or PNG file into an [`Image`]
///
/// 8-bit luminance files stay grayscale; every other color type is
/// converted to 8-bit RGB.
///
/// # Errors
///
/// Returns `ImageLoad` with the path attached if the file cannot be read or
/// decoded
pub fn load_image(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|source| MeasureError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "decoded {} as {:?} ({}x{})",
        path.display(),
        decoded.color(),
        decoded.width(),
        decoded.height()
    );

    Image::from_dynamic(decoded)
}

/// Decode an in-memory JPG or PNG buffer
///
/// # Errors
///
/// Returns `ImageLoad` if the bytes are not a supported image
pub fn decode_bytes(bytes: &[u8]) -> Result<Image> {
    let decoded = image::load_from_memory(bytes).map_err(|source| MeasureError::ImageLoad {
        path: PathBuf::from("<memory>"),
        source,
    })?;
    Image::from_dynamic(decoded)
}

/// True if the path carries a supported image extension (case-insensitive)
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Resolve a batch target into a sorted list of image files
///
/// A file target must itself be a supported image. A directory target yields
/// its supported images (not recursive).
///
/// # Errors
///
/// Returns `InvalidParameter` for an unsupported file or a missing target,
/// and `FileSystem` if the directory cannot be read
pub fn collect_images(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        return if is_supported_image(target) {
            Ok(vec![target.to_path_buf()])
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"file must be a JPG or PNG image",
            ))
        };
    }

    if !target.is_dir() {
        return Err(invalid_parameter(
            "target",
            &target.display(),
            &"must be an image file or a directory",
        ));
    }

    let read_error = |source| MeasureError::FileSystem {
        path: target.to_path_buf(),
        operation: "directory scan",
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(target).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    files.sort();

    debug!("found {} images in {}", files.len(), target.display());
    Ok(files)
}
