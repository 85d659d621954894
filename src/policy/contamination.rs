//! Top strip scan rejecting images with any non-white pixel near the upper edge

use crate::color::pixel::{Color, PixelGrid};
use crate::color::whiteness::WhitenessClassifier;
use crate::io::configuration::DEFAULT_TOP_STRIP_FRACTION;

/// First non-white pixel found in the top strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contaminant {
    /// Column of the pixel
    pub x: u32,
    /// Row of the pixel
    pub y: u32,
    /// Offending color
    pub color: Color,
}

/// Scans the top `ceil(height * fraction)` rows across the full width
///
/// A grid that could not be produced never reaches the detector: decoding
/// failures are skipped by the folder processor, so the detector only ever
/// reports contamination it actually observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopStripDetector {
    fraction: f64,
    whiteness: WhitenessClassifier,
}

impl Default for TopStripDetector {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_STRIP_FRACTION, WhitenessClassifier::default())
    }
}

impl TopStripDetector {
    /// Create a detector scanning `fraction` of the rows
    pub const fn new(fraction: f64, whiteness: WhitenessClassifier) -> Self {
        Self {
            fraction,
            whiteness,
        }
    }

    /// Number of rows scanned for an image of `height` rows
    pub fn strip_rows(&self, height: u32) -> u32 {
        let rows = (f64::from(height) * self.fraction).ceil();
        if rows <= 0.0 {
            0
        } else {
            (rows as u32).min(height)
        }
    }

    /// Locate the first non-white pixel, scanning rows top-down and left to right
    pub fn first_contaminant<G: PixelGrid + ?Sized>(&self, grid: &G) -> Option<Contaminant> {
        let width = grid.width();
        (0..self.strip_rows(grid.height()))
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .find_map(|(x, y)| {
                let color = grid.pixel_at(x, y);
                (!self.whiteness.is_white(color)).then_some(Contaminant { x, y, color })
            })
    }

    /// Whether any pixel in the strip fails the whiteness check
    pub fn has_contamination<G: PixelGrid + ?Sized>(&self, grid: &G) -> bool {
        self.first_contaminant(grid).is_some()
    }
}
