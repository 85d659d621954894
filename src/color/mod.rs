//! Color primitives and region statistics
//!
//! This module contains the pure building blocks of classification:
//! - Exact RGBA colors and the pixel grid abstraction
//! - Rectangular regions and dominant-color counting
//! - The per-channel whiteness predicate

/// Exact RGBA colors and pixel grid backends
pub mod pixel;
/// Half-open regions and dominant-color detection
pub mod region;
/// Threshold-based whiteness predicate
pub mod whiteness;

pub use pixel::{Color, ColorGrid, PixelGrid};
pub use region::{Region, color_histogram, dominant_color};
pub use whiteness::WhitenessClassifier;
