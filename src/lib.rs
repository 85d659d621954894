//! Image dataset pre-filter that keeps pictures with white side bands and a clean top edge
//!
//! Each image is reduced to a pixel grid, its top strip is scanned for any non-white pixel,
//! and the dominant colors of a left and a right band over the upper half must both be white
//! for the image to be copied into the destination folder.

#![forbid(unsafe_code)]

/// Exact colors, pixel grids, regions and the whiteness predicate
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Accept/reject rules combining contamination and band checks
pub mod policy;

pub use io::error::{FilterError, Result};
