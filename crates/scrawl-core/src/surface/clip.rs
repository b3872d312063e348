//! Rectangle clipping and center-crop extraction
//!
//! Functions for extracting rectangular sub-regions from a surface and for
//! locating the bounding box of its foreground (alpha > 0) pixels.

use super::{Surface, SurfaceMut};
use crate::color;
use crate::error::{Error, Result};
use crate::rect::Rect;

impl Surface {
    /// Extract a rectangular sub-region of the surface.
    ///
    /// If the rectangle extends beyond the surface bounds, it is clipped to
    /// the valid region.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested width or height is 0
    /// - The rectangle origin is outside the surface
    ///
    /// # Examples
    ///
    /// ```
    /// use scrawl_core::Surface;
    ///
    /// let surface = Surface::new(100, 80).unwrap();
    /// let clipped = surface.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!(clipped.width(), 20);   // clipped: 100 - 80
    /// assert_eq!(clipped.height(), 20);  // clipped: 80 - 60
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Surface> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let src_w = self.width();
        let src_h = self.height();

        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside surface bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);

        let mut out = SurfaceMut::new(clip_w, clip_h)?;
        for dy in 0..clip_h {
            let src = &self.row_data(y + dy)[x as usize..(x + clip_w) as usize];
            out.row_data_mut(dy).copy_from_slice(src);
        }

        Ok(out.into())
    }

    /// Find the minimal bounding box of all foreground pixels.
    ///
    /// Scans every pixel once, tracking the minimum and maximum row and
    /// column among pixels whose alpha exceeds zero. The returned rectangle
    /// covers `[min_col..=max_col] x [min_row..=max_row]`.
    ///
    /// Returns `None` if no pixel carries coverage.
    pub fn foreground_bbox(&self) -> Option<Rect> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;

        for y in 0..self.height() {
            for (x, &p) in self.row_data(y).iter().enumerate() {
                if color::alpha(p) == 0 {
                    continue;
                }
                let x = x as u32;
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((minx, miny, maxx, maxy)) => {
                        (minx.min(x), miny.min(y), maxx.max(x), maxy.max(y))
                    }
                });
            }
        }

        bounds.map(|(minx, miny, maxx, maxy)| {
            Rect::from_inclusive(minx as i32, miny as i32, maxx as i32, maxy as i32)
        })
    }

    /// Crop the surface to the bounding box of its foreground pixels.
    ///
    /// The result keeps the native aspect ratio of the content; squaring is
    /// left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyForeground`] if the surface has no pixel with
    /// non-zero alpha. A zero-size or full-surface crop is never returned
    /// in that case.
    pub fn crop_to_foreground(&self) -> Result<(Surface, Rect)> {
        let bbox = self.foreground_bbox().ok_or(Error::EmptyForeground)?;
        let cropped = self.clip_rectangle(
            bbox.x as u32,
            bbox.y as u32,
            bbox.w as u32,
            bbox.h as u32,
        )?;
        Ok((cropped, bbox))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: u32 = 0x0000_00FF;

    fn surface_with(w: u32, h: u32, pixels: &[(u32, u32)]) -> Surface {
        let mut m = SurfaceMut::new(w, h).unwrap();
        for &(x, y) in pixels {
            m.set_pixel(x, y, INK).unwrap();
        }
        m.into()
    }

    #[test]
    fn test_clip_rectangle_basic() {
        let s = surface_with(100, 80, &[(50, 40)]);
        let clipped = s.clip_rectangle(40, 30, 20, 20).unwrap();
        assert_eq!(clipped.width(), 20);
        assert_eq!(clipped.height(), 20);
        // (50,40) in the source lands at (10,10)
        assert_eq!(clipped.get_pixel(10, 10), Some(INK));
        assert_eq!(clipped.count_foreground(), 1);
    }

    #[test]
    fn test_clip_rectangle_rejects_bad_regions() {
        let s = Surface::new(100, 80).unwrap();
        assert!(s.clip_rectangle(0, 0, 0, 10).is_err());
        assert!(s.clip_rectangle(100, 0, 10, 10).is_err());
        assert!(s.clip_rectangle(0, 80, 10, 10).is_err());
    }

    #[test]
    fn test_foreground_bbox_single_pixel() {
        let s = surface_with(30, 30, &[(7, 12)]);
        assert_eq!(s.foreground_bbox(), Some(Rect::new_unchecked(7, 12, 1, 1)));
    }

    #[test]
    fn test_foreground_bbox_spans_extremes() {
        // extremes come from different pixels on each side
        let s = surface_with(50, 40, &[(10, 5), (3, 20), (44, 21), (20, 33)]);
        assert_eq!(
            s.foreground_bbox(),
            Some(Rect::from_inclusive(3, 5, 44, 33))
        );
    }

    #[test]
    fn test_foreground_ignores_transparent_color() {
        let mut m = SurfaceMut::new(10, 10).unwrap();
        m.set_rgba(2, 2, 255, 0, 0, 0).unwrap();
        let s: Surface = m.into();
        assert_eq!(s.foreground_bbox(), None);
    }

    #[test]
    fn test_crop_to_foreground() {
        let s = surface_with(100, 100, &[(20, 30), (25, 60)]);
        let (cropped, bbox) = s.crop_to_foreground().unwrap();
        assert_eq!(bbox, Rect::from_inclusive(20, 30, 25, 60));
        assert_eq!((cropped.width(), cropped.height()), (6, 31));
        assert!(cropped.is_foreground(0, 0));
        assert!(cropped.is_foreground(5, 30));
        assert_eq!(cropped.count_foreground(), 2);
    }

    #[test]
    fn test_crop_to_foreground_empty() {
        let s = Surface::new(64, 64).unwrap();
        assert!(matches!(s.crop_to_foreground(), Err(Error::EmptyForeground)));
    }

    #[test]
    fn test_crop_full_surface_foreground() {
        let mut m = SurfaceMut::new(3, 2).unwrap();
        m.fill(INK);
        let s: Surface = m.into();
        let (cropped, bbox) = s.crop_to_foreground().unwrap();
        assert_eq!(bbox, Rect::new_unchecked(0, 0, 3, 2));
        assert_eq!(cropped.data(), s.data());
    }
}
