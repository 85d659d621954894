//! Per-channel brightness predicate deciding whether a color counts as white

use crate::color::pixel::Color;
use crate::io::configuration::DEFAULT_WHITE_THRESHOLD;

/// Classifies colors as white when red, green and blue all reach the threshold
///
/// Alpha never takes part in the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitenessClassifier {
    threshold: u8,
}

impl Default for WhitenessClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_WHITE_THRESHOLD)
    }
}

impl WhitenessClassifier {
    /// Create a classifier with a custom per-channel floor
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Per-channel floor in use
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Whether every color channel of `color` is at or above the threshold
    pub const fn is_white(&self, color: Color) -> bool {
        color.red >= self.threshold && color.green >= self.threshold && color.blue >= self.threshold
    }

    /// Like [`Self::is_white`], with an absent color never counting as white
    pub const fn accepts(&self, color: Option<Color>) -> bool {
        match color {
            Some(color) => self.is_white(color),
            None => false,
        }
    }
}
