//! Exact RGBA colors and the pixel grid abstraction shared by every analysis

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::color::region::Region;

/// Four 8-bit channels compared exactly, without tolerance or normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel (carried for equality, ignored by whiteness)
    pub alpha: u8,
}

impl Color {
    /// Opaque pure white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque pure black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build a color from all four channels
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build an opaque color
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = pixel.0;
        Self::rgba(red, green, blue, alpha)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Self([color.red, color.green, color.blue, color.alpha])
    }
}

/// Read-only view over decoded pixels
///
/// Coordinates are `x` in `0..width()` and `y` in `0..height()`. Callers stay
/// inside those bounds; out-of-range reads yield [`Color::TRANSPARENT`].
pub trait PixelGrid {
    /// Number of columns
    fn width(&self) -> u32;

    /// Number of rows
    fn height(&self) -> u32;

    /// Color of the pixel at column `x`, row `y`
    fn pixel_at(&self, x: u32, y: u32) -> Color;
}

impl PixelGrid for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel_at(&self, x: u32, y: u32) -> Color {
        self.get_pixel_checked(x, y)
            .map_or(Color::TRANSPARENT, |pixel| Color::from(*pixel))
    }
}

/// In-memory grid of exact colors stored row-major as `(row, col)`
///
/// Used to build synthetic images without touching the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    cells: Array2<Color>,
}

impl ColorGrid {
    /// Create a grid where every pixel has the same color
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            cells: Array2::from_elem((height as usize, width as usize), color),
        }
    }

    /// Overwrite a single pixel, ignoring coordinates outside the grid
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if let Some(cell) = self.cells.get_mut((y as usize, x as usize)) {
            *cell = color;
        }
    }

    /// Paint every pixel of `region` that lies inside the grid
    pub fn fill_region(&mut self, region: Region, color: Color) {
        for (x, y) in region.pixels() {
            self.set(x, y, color);
        }
    }

    /// Copy the grid into an `image` buffer, e.g. for saving to disk
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            self.pixel_at(x, y).into()
        })
    }
}

impl From<&RgbaImage> for ColorGrid {
    fn from(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let cells = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            image.pixel_at(col as u32, row as u32)
        });
        Self { cells }
    }
}

impl PixelGrid for ColorGrid {
    fn width(&self) -> u32 {
        self.cells.dim().1 as u32
    }

    fn height(&self) -> u32 {
        self.cells.dim().0 as u32
    }

    fn pixel_at(&self, x: u32, y: u32) -> Color {
        self.cells
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(Color::TRANSPARENT)
    }
}
