//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.

use super::{Surface, SurfaceMut};
use crate::color;
use crate::error::{Error, Result};

impl Surface {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get the alpha (coverage) value at (x, y).
    pub fn get_alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.get_pixel(x, y).map(color::alpha)
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }

    /// Check whether the pixel at (x, y) carries any stroke coverage.
    ///
    /// Out-of-bounds coordinates are background.
    #[inline]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.get_alpha(x, y).is_some_and(|a| a > 0)
    }

    /// Count pixels with non-zero alpha.
    pub fn count_foreground(&self) -> usize {
        self.data()
            .iter()
            .filter(|&&p| color::alpha(p) > 0)
            .count()
    }
}

impl SurfaceMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set an RGBA pixel at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }

    /// Set a pixel given signed coordinates, ignoring positions off the
    /// surface.
    ///
    /// Returns `true` if the pixel was written.
    #[inline]
    pub fn set_pixel_clipped(&mut self, x: i32, y: i32, val: u32) -> bool {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return false;
        }
        self.set_pixel_unchecked(x as u32, y as u32, val);
        true
    }
}
