//! Accept/reject decision combining the top strip scan with left and right band colors
//!
//! The rule is evaluated in a fixed order and short-circuits:
//! 1. Any non-white pixel in the top strip rejects the image
//! 2. The dominant colors of the left and right bands over the upper part of the
//!    image must both be white for the image to be accepted

use std::fmt;

use tracing::debug;

use crate::color::pixel::PixelGrid;
use crate::color::region::{Region, dominant_color};
use crate::color::whiteness::WhitenessClassifier;
use crate::io::configuration::PolicyConfig;
use crate::io::error::Result;
use crate::policy::contamination::TopStripDetector;

/// Why an image was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// A non-white pixel was found in the top strip
    TopStripContaminated,
    /// The left or right band is dominated by a non-white color
    NonWhiteDominantColor,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopStripContaminated => write!(f, "top-strip contamination"),
            Self::NonWhiteDominantColor => write!(f, "non-white dominant color"),
        }
    }
}

/// Outcome of evaluating one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The image satisfies the policy
    Accepted,
    /// The image fails the policy
    Rejected(RejectionReason),
}

impl Decision {
    /// Whether the image should be kept
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Validated policy ready to classify pixel grids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptancePolicy {
    config: PolicyConfig,
    whiteness: WhitenessClassifier,
    top_strip: TopStripDetector,
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self::from_valid(PolicyConfig::default())
    }
}

impl AcceptancePolicy {
    /// Build a policy from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: PolicyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    const fn from_valid(config: PolicyConfig) -> Self {
        let whiteness = WhitenessClassifier::new(config.white_threshold);
        Self {
            config,
            whiteness,
            top_strip: TopStripDetector::new(config.top_strip_fraction, whiteness),
        }
    }

    /// Configuration this policy was built from
    pub const fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Detector used for the top strip check
    pub const fn top_strip(&self) -> &TopStripDetector {
        &self.top_strip
    }

    /// Whiteness predicate shared by every check
    pub const fn whiteness(&self) -> &WhitenessClassifier {
        &self.whiteness
    }

    /// Left and right analysis bands for a `width` × `height` image
    ///
    /// Both bands start at the top row and extend to `floor(height * vertical)`.
    /// The left band spans `[0, floor(width * left))` and the right band
    /// `[floor(width * right_start), width)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the computed bounds are inverted
    pub fn bands(&self, width: u32, height: u32) -> Result<(Region, Region)> {
        let band_height = scale_floor(height, self.config.vertical_band_fraction);
        let left_width = scale_floor(width, self.config.left_band_fraction);
        let right_start = scale_floor(width, self.config.right_band_start);

        let left = Region::new(0, left_width, 0, band_height)?;
        let right = Region::new(right_start, width, 0, band_height)?;
        Ok((left, right))
    }

    /// Classify one image
    ///
    /// # Errors
    ///
    /// Returns an error if a band does not fit inside the grid
    pub fn evaluate<G: PixelGrid + ?Sized>(&self, grid: &G) -> Result<Decision> {
        if let Some(contaminant) = self.top_strip.first_contaminant(grid) {
            debug!(
                x = contaminant.x,
                y = contaminant.y,
                color = ?contaminant.color,
                "non-white pixel in top strip"
            );
            return Ok(Decision::Rejected(RejectionReason::TopStripContaminated));
        }

        let (left_band, right_band) = self.bands(grid.width(), grid.height())?;
        let left_color = dominant_color(grid, left_band)?;
        let right_color = dominant_color(grid, right_band)?;
        debug!(%left_band, ?left_color, %right_band, ?right_color, "band dominant colors");

        if self.whiteness.accepts(left_color) && self.whiteness.accepts(right_color) {
            Ok(Decision::Accepted)
        } else {
            Ok(Decision::Rejected(RejectionReason::NonWhiteDominantColor))
        }
    }
}

fn scale_floor(length: u32, fraction: f64) -> u32 {
    let scaled = (f64::from(length) * fraction).floor();
    (scaled as u32).min(length)
}
