//! Surface - The pixel buffer a gesture is rendered onto
//!
//! # Pixel layout
//!
//! - One packed 32-bit RGBA word per pixel (`0xRRGGBBAA`)
//! - Rows are stored top to bottom, pixels left to right
//! - Alpha carries stroke coverage; alpha 0 is background
//!
//! # Ownership model
//!
//! `Surface` uses `Arc` for cheap cloning (shared, read-only ownership).
//! To modify pixel data, convert to `SurfaceMut` via
//! [`Surface::try_into_mut`] or [`Surface::to_mut`], then convert back with
//! `Into<Surface>`. Once a gesture is finalized its surface is frozen into a
//! `Surface` and downstream stages can only read it.

mod access;
mod border;
mod clip;
pub mod graphics;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Drawing-surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check that neither dimension is zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Internal surface data
#[derive(Debug, Clone)]
struct SurfaceData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed RGBA pixels, row-major
    data: Vec<u32>,
}

impl SurfaceData {
    fn new(width: u32, height: u32) -> Result<Self> {
        SurfaceSize::new(width, height).validate()?;
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![crate::color::TRANSPARENT; len],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Immutable RGBA pixel surface
///
/// # Examples
///
/// ```
/// use scrawl_core::Surface;
///
/// let surface = Surface::new(200, 100).unwrap();
/// assert_eq!(surface.width(), 200);
/// assert_eq!(surface.height(), 100);
/// assert_eq!(surface.count_foreground(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Surface {
    inner: Arc<SurfaceData>,
}

impl Surface {
    /// Create a new fully transparent surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Surface {
            inner: Arc::new(SurfaceData::new(width, height)?),
        })
    }

    /// Create a new transparent surface of the given size.
    pub fn with_size(size: SurfaceSize) -> Result<Self> {
        Self::new(size.width, size.height)
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get both dimensions.
    #[inline]
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixel data (row-major).
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = self.inner.index(0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Check if two surfaces have the same dimensions.
    pub fn sizes_equal(&self, other: &Surface) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a new transparent surface with the same dimensions.
    pub fn create_template(&self) -> Self {
        Surface {
            inner: Arc::new(SurfaceData {
                width: self.inner.width,
                height: self.inner.height,
                data: vec![crate::color::TRANSPARENT; self.inner.data.len()],
            }),
        }
    }

    /// Create a deep copy that shares no data with `self`.
    pub fn deep_clone(&self) -> Self {
        Surface {
            inner: Arc::new(self.inner.as_ref().clone()),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<SurfaceMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(SurfaceMut { inner: data }),
            Err(arc) => Err(Surface { inner: arc }),
        }
    }

    /// Create a mutable copy of this surface.
    pub fn to_mut(&self) -> SurfaceMut {
        SurfaceMut {
            inner: self.inner.as_ref().clone(),
        }
    }

    /// Get the number of strong references to this surface.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

/// Mutable surface
///
/// Exclusive owner of its pixel data. Convert back to an immutable
/// [`Surface`] using `Into<Surface>`.
#[derive(Debug)]
pub struct SurfaceMut {
    inner: SurfaceData,
}

impl SurfaceMut {
    /// Create a new fully transparent mutable surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(SurfaceMut {
            inner: SurfaceData::new(width, height)?,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get both dimensions.
    #[inline]
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get one mutable row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = self.inner.index(0, y);
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }

    /// Reset every pixel to transparent background.
    pub fn clear(&mut self) {
        self.inner.data.fill(crate::color::TRANSPARENT);
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: u32) {
        self.inner.data.fill(pixel);
    }
}

impl From<SurfaceMut> for Surface {
    fn from(surface: SurfaceMut) -> Self {
        Surface {
            inner: Arc::new(surface.inner),
        }
    }
}
