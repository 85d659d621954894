//! Policy constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Default values for configurable parameters
/// Minimum value of each color channel for a pixel to count as white
pub const DEFAULT_WHITE_THRESHOLD: u8 = 235;

// Tuned down from 10% and later 3% of the image height
/// Fraction of the image height, from the top, scanned for contamination
pub const DEFAULT_TOP_STRIP_FRACTION: f64 = 0.005;

/// Fraction of the width covered by the left band
pub const DEFAULT_LEFT_BAND_FRACTION: f64 = 0.15;

/// Fraction of the width where the right band begins
pub const DEFAULT_RIGHT_BAND_START: f64 = 0.85;

/// Fraction of the height, from the top, covered by both bands
pub const DEFAULT_VERTICAL_BAND_FRACTION: f64 = 0.5;

// Input selection
/// Lowercase file extensions treated as candidate images
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Tunable parameters of the acceptance policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyConfig {
    /// Per-channel floor for white
    pub white_threshold: u8,
    /// Fraction of rows scanned at the top of the image
    pub top_strip_fraction: f64,
    /// Right edge of the left band as a fraction of the width
    pub left_band_fraction: f64,
    /// Left edge of the right band as a fraction of the width
    pub right_band_start: f64,
    /// Bottom edge of both bands as a fraction of the height
    pub vertical_band_fraction: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            white_threshold: DEFAULT_WHITE_THRESHOLD,
            top_strip_fraction: DEFAULT_TOP_STRIP_FRACTION,
            left_band_fraction: DEFAULT_LEFT_BAND_FRACTION,
            right_band_start: DEFAULT_RIGHT_BAND_START,
            vertical_band_fraction: DEFAULT_VERTICAL_BAND_FRACTION,
        }
    }
}

impl PolicyConfig {
    /// Check that every fraction lies in `[0, 1]` and the bands are ordered
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the first offending field
    pub fn validate(&self) -> Result<()> {
        check_fraction("top_strip_fraction", self.top_strip_fraction)?;
        check_fraction("left_band_fraction", self.left_band_fraction)?;
        check_fraction("right_band_start", self.right_band_start)?;
        check_fraction("vertical_band_fraction", self.vertical_band_fraction)?;

        if self.left_band_fraction > self.right_band_start {
            return Err(invalid_parameter(
                "left_band_fraction",
                &self.left_band_fraction,
                &format!(
                    "must not exceed right_band_start ({})",
                    self.right_band_start
                ),
            ));
        }
        Ok(())
    }
}

fn check_fraction(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a finite fraction between 0 and 1",
        ))
    }
}
