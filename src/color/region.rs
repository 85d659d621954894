//! Half-open pixel regions and exact dominant-color counting

use std::collections::HashMap;
use std::fmt;

use crate::color::pixel::{Color, PixelGrid};
use crate::io::error::{FilterError, Result, invalid_parameter};

/// Rectangle `[start_x, end_x) × [start_y, end_y)` in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    start_x: u32,
    end_x: u32,
    start_y: u32,
    end_y: u32,
}

impl Region {
    /// Create a region from its half-open horizontal and vertical spans
    ///
    /// # Errors
    ///
    /// Returns an error if a start coordinate is greater than its end coordinate
    pub fn new(start_x: u32, end_x: u32, start_y: u32, end_y: u32) -> Result<Self> {
        if start_x > end_x {
            return Err(invalid_parameter(
                "start_x",
                &start_x,
                &format!("must not exceed end_x ({end_x})"),
            ));
        }
        if start_y > end_y {
            return Err(invalid_parameter(
                "start_y",
                &start_y,
                &format!("must not exceed end_y ({end_y})"),
            ));
        }
        Ok(Self {
            start_x,
            end_x,
            start_y,
            end_y,
        })
    }

    /// Region covering every pixel of a `width` × `height` grid
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            start_x: 0,
            end_x: width,
            start_y: 0,
            end_y: height,
        }
    }

    /// First column (inclusive)
    pub const fn start_x(&self) -> u32 {
        self.start_x
    }

    /// Last column (exclusive)
    pub const fn end_x(&self) -> u32 {
        self.end_x
    }

    /// First row (inclusive)
    pub const fn start_y(&self) -> u32 {
        self.start_y
    }

    /// Last row (exclusive)
    pub const fn end_y(&self) -> u32 {
        self.end_y
    }

    /// Number of columns
    pub const fn width(&self) -> u32 {
        self.end_x - self.start_x
    }

    /// Number of rows
    pub const fn height(&self) -> u32 {
        self.end_y - self.start_y
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Whether the region covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether the region lies entirely inside a `width` × `height` grid
    pub const fn fits(&self, width: u32, height: u32) -> bool {
        self.end_x <= width && self.end_y <= height
    }

    /// Coordinates `(x, y)` in row-major order, top row first
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let (start_x, end_x) = (self.start_x, self.end_x);
        (self.start_y..self.end_y).flat_map(move |y| (start_x..end_x).map(move |x| (x, y)))
    }

    fn check_fits<G: PixelGrid + ?Sized>(&self, grid: &G) -> Result<()> {
        if self.fits(grid.width(), grid.height()) {
            Ok(())
        } else {
            Err(FilterError::InvalidRegion {
                region: *self,
                width: grid.width(),
                height: grid.height(),
            })
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.start_x, self.end_x, self.start_y, self.end_y
        )
    }
}

/// Most frequent exact color in `region`
///
/// Pixels are visited row-major. The leader only changes when a count becomes
/// strictly greater than the best so far, so among tied colors the first one
/// to reach the maximum wins. Empty regions have no dominant color.
///
/// # Errors
///
/// Returns [`FilterError::InvalidRegion`] if the region extends past the grid
pub fn dominant_color<G: PixelGrid + ?Sized>(grid: &G, region: Region) -> Result<Option<Color>> {
    region.check_fits(grid)?;

    let mut counts: HashMap<Color, u64> = HashMap::new();
    let mut leader = None;
    let mut max_count = 0;

    for (x, y) in region.pixels() {
        let color = grid.pixel_at(x, y);
        let count = counts.entry(color).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            leader = Some(color);
        }
    }

    Ok(leader)
}

/// Occurrence count of every exact color in `region`
///
/// # Errors
///
/// Returns [`FilterError::InvalidRegion`] if the region extends past the grid
pub fn color_histogram<G: PixelGrid + ?Sized>(
    grid: &G,
    region: Region,
) -> Result<HashMap<Color, u64>> {
    region.check_fits(grid)?;

    let mut counts = HashMap::new();
    for (x, y) in region.pixels() {
        *counts.entry(grid.pixel_at(x, y)).or_insert(0) += 1;
    }
    Ok(counts)
}
