//! Error types for classification and folder operations

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::color::region::Region;

/// Main error type for all filtering operations
///
/// Policy rejections are ordinary [`crate::policy::Decision`] values and never
/// appear here.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Failed to decode a source image
    #[error("Failed to load image '{}': {source}", path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        #[source]
        source: image::ImageError,
    },

    /// Region extends past the grid
    #[error("Region {region} does not fit a {width}x{height} grid")]
    InvalidRegion {
        /// Offending region
        region: Region,
        /// Grid width in pixels
        width: u32,
        /// Grid height in pixels
        height: u32,
    },

    /// Configuration value failed validation
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for filtering results
pub type Result<T> = std::result::Result<T, FilterError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FilterError {
    FilterError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error tied to `path`
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> FilterError {
    FilterError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
