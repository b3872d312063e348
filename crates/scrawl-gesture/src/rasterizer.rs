//! Incremental rasterizer
//!
//! Owns the drawing surface while a gesture is in progress. Each new point
//! paints only the segment from the previous point, so a gesture drawn
//! incrementally ends up pixel-identical to [`rasterize`] on the finished
//! path.

use crate::{GestureError, GestureResult};
use scrawl_core::{Path, Point, StrokeStyle, Surface, SurfaceMut, SurfaceSize};

/// Render a whole path onto a fresh transparent surface.
pub fn rasterize(size: SurfaceSize, path: &Path, style: &StrokeStyle) -> GestureResult<Surface> {
    let mut surface = new_surface(size)?;
    surface.render_path(path, style);
    Ok(surface.into())
}

fn new_surface(size: SurfaceSize) -> GestureResult<SurfaceMut> {
    if size.validate().is_err() {
        return Err(GestureError::InvalidSurfaceDimensions {
            width: size.width,
            height: size.height,
        });
    }
    Ok(SurfaceMut::new(size.width, size.height)?)
}

/// Draws a gesture onto its surface as points arrive
#[derive(Debug)]
pub struct Rasterizer {
    style: StrokeStyle,
    surface: Option<SurfaceMut>,
    last: Option<Point>,
}

impl Rasterizer {
    /// Create an idle rasterizer drawing with `style`
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            style,
            surface: None,
            last: None,
        }
    }

    /// Stroke used for every segment
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Start a gesture on a cleared surface of `size`.
    ///
    /// A single point paints nothing.
    pub fn begin(&mut self, size: SurfaceSize, point: Point) -> GestureResult<()> {
        self.surface = Some(new_surface(size)?);
        self.last = Some(point);
        Ok(())
    }

    /// Paint the segment from the previous point to `point`.
    ///
    /// Returns the number of pixels painted; 0 if no gesture is active.
    pub fn extend(&mut self, point: Point) -> usize {
        let (Some(surface), Some(last)) = (self.surface.as_mut(), self.last) else {
            return 0;
        };
        self.last = Some(point);
        surface.render_segment(last, point, &self.style)
    }

    /// Clear the surface and paint all of `path` again.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidSurfaceDimensions`] for a zero size.
    pub fn redraw(&mut self, size: SurfaceSize, path: &Path) -> GestureResult<usize> {
        let mut surface = match self.surface.take() {
            Some(mut s) if s.size() == size => {
                s.clear();
                s
            }
            _ => new_surface(size)?,
        };
        let painted = surface.render_path(path, &self.style);
        self.surface = Some(surface);
        self.last = path.last();
        Ok(painted)
    }

    /// Whether a gesture is being drawn
    pub fn is_active(&self) -> bool {
        self.surface.is_some()
    }

    /// The surface of the gesture being drawn
    pub fn surface(&self) -> Option<&SurfaceMut> {
        self.surface.as_ref()
    }

    /// Stop drawing and hand the surface over read-only.
    pub fn finish(&mut self) -> Option<Surface> {
        self.last = None;
        self.surface.take().map(Surface::from)
    }

    /// Drop the active gesture's surface.
    pub fn reset(&mut self) {
        self.surface = None;
        self.last = None;
    }
}
