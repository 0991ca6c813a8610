use alloc::{vec, vec::Vec};

use crate::error::{Error, Result};

/// Widest image the hires blitter routines handle.
///
/// Purely informational: nothing in this crate rejects wider rasters.
pub const MAX_HIRES_WIDTH: usize = 256;

/// A read-only grid of binarized pixels.
///
/// A pixel value of `0` is OFF, anything else is ON.
pub trait Raster {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Caller guarantees `x < width()` and `y < height()`.
    fn pixel_at(&self, x: usize, y: usize) -> u8;

    fn is_on(&self, x: usize, y: usize) -> bool {
        self.pixel_at(x, y) != 0
    }
}

/// Owned raster, one byte per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// All-OFF bitmap.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .expect("bitmap dimensions overflow usize");
        Self {
            width,
            height,
            pixels: vec![0u8; len],
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(Error::TooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = value;
        }
    }
}

impl Raster for Bitmap {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel_at(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }
}
