//! Decoding source files into RGBA pixel grids

use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::io::error::{FilterError, Result};

/// Decode an image file into an RGBA buffer
///
/// The format is detected from the file contents, falling back to the
/// extension, so mislabelled files still decode when possible. The file
/// handle is released before returning on every path.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The contents are not a supported image format
/// - The image data is corrupt
pub fn load_grid(path: &Path) -> Result<RgbaImage> {
    let to_load_error = |source| FilterError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| to_load_error(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| to_load_error(image::ImageError::IoError(e)))?;

    let decoded = reader.decode().map_err(to_load_error)?;
    Ok(decoded.to_rgba8())
}

/// Whether `path` carries one of the supported image extensions, ignoring case
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            crate::io::configuration::SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| extension.eq_ignore_ascii_case(supported))
        })
}
