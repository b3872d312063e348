//! scrawl-core - Basic data structures for gesture rasterization
//!
//! This crate provides the fundamental data structures used throughout
//! the scrawl gesture pipeline:
//!
//! - [`Surface`] / [`SurfaceMut`] - RGBA pixel buffer (immutable / mutable)
//! - [`Point`] / [`Path`] - Recorded pointer positions in stroke order
//! - [`Rect`] - Axis-aligned rectangle regions
//! - [`StrokeStyle`] - Width, cap and paint color used to render strokes
//!
//! Center-crop extraction lives on [`Surface`] itself
//! ([`Surface::crop_to_foreground`]), as does stroke rendering
//! ([`SurfaceMut::render_segment`]).

pub mod error;
pub mod path;
pub mod rect;
pub mod surface;

pub use color::Rgba;
pub use error::{Error, Result};
pub use path::{Path, Point, Segments};
pub use rect::Rect;
pub use surface::graphics::{StrokeCap, StrokeStyle};
pub use surface::{Surface, SurfaceMut, SurfaceSize};

/// Color channel helpers for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB). The alpha
/// channel carries stroke coverage; a fully transparent pixel (`0`) is
/// background.
pub mod color {
    use serde::{Deserialize, Serialize};

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Fully transparent background pixel
    pub const TRANSPARENT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Paint color with straight (non-premultiplied) alpha.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Rgba {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }

    impl Rgba {
        /// Create a new color
        pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
            Self { r, g, b, a }
        }

        /// Opaque black, the default ink
        pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
        /// Opaque white
        pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
        /// Fully transparent
        pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

        /// Compose as a packed 32-bit pixel
        #[inline]
        pub fn to_pixel(self) -> u32 {
            compose_rgba(self.r, self.g, self.b, self.a)
        }

        /// Decompose a packed 32-bit pixel
        #[inline]
        pub fn from_pixel(pixel: u32) -> Self {
            let (r, g, b, a) = extract_rgba(pixel);
            Self { r, g, b, a }
        }
    }

    impl Default for Rgba {
        fn default() -> Self {
            Self::BLACK
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_channel_layout() {
            let p = compose_rgba(0x11, 0x22, 0x33, 0x44);
            assert_eq!(p, 0x1122_3344);
            assert_eq!(red(p), 0x11);
            assert_eq!(green(p), 0x22);
            assert_eq!(blue(p), 0x33);
            assert_eq!(alpha(p), 0x44);
        }

        #[test]
        fn test_rgba_pixel_conversion() {
            let c = Rgba::new(200, 100, 50, 255);
            assert_eq!(Rgba::from_pixel(c.to_pixel()), c);
            assert_eq!(Rgba::TRANSPARENT.to_pixel(), TRANSPARENT);
        }

        #[test]
        fn test_default_ink_is_opaque_black() {
            assert_eq!(Rgba::default(), Rgba::BLACK);
            assert_eq!(alpha(Rgba::default().to_pixel()), 255);
        }
    }
}
