//! Stroke rendering
//!
//! Draws path segments onto a [`SurfaceMut`] with a fixed stroke width and
//! a single paint color.
//!
//! # Rendering policy
//!
//! - No anti-aliasing: a covered pixel is overwritten with the paint color
//!   (alpha included), everything else is left untouched.
//! - A segment is a Bresenham center line widened by parallel copies offset
//!   along y (mostly-horizontal segments) or x (otherwise), alternating
//!   sides `-1, +1, -2, +2, ...`. This yields butt caps: the stroke does not
//!   extend past the segment endpoints.
//! - [`StrokeCap::Round`] additionally stamps a filled disc of radius
//!   `width / 2` on both endpoints.
//! - Pixels that fall outside the surface are clipped silently. Segments
//!   are clipped geometrically first, so far-away points cost no more than
//!   points on the surface.
//! - Stroke widths above [`StrokeStyle::MAX_WIDTH`] are drawn at that width.
//!
//! The same policy must be used wherever samples are captured, otherwise
//! training and prediction inputs diverge.

use super::SurfaceMut;
use crate::color::Rgba;
use crate::path::{Path, Point};
use serde::{Deserialize, Serialize};

/// Shape of segment endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeCap {
    /// Stroke ends exactly at the endpoints
    #[default]
    Butt,
    /// Filled disc centered on each endpoint
    Round,
}

/// Width, cap and paint color used to render a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    /// Stroke width in pixels
    pub width: u32,
    /// Endpoint shape
    pub cap: StrokeCap,
    /// Paint color; its alpha becomes the stroke coverage
    pub color: Rgba,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 5,
            cap: StrokeCap::Butt,
            color: Rgba::BLACK,
        }
    }
}

impl StrokeStyle {
    /// Widest stroke the renderer draws; wider styles are clamped.
    pub const MAX_WIDTH: u32 = 1024;

    /// Create a style with a specific width
    pub fn with_width(width: u32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set the endpoint shape
    pub fn cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the paint color
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Width actually drawn: at least 1 and at most [`Self::MAX_WIDTH`].
    #[inline]
    pub fn effective_width(&self) -> u32 {
        self.width.clamp(1, Self::MAX_WIDTH)
    }

    /// Number of pixels the stroke extends on each side of its center line.
    #[inline]
    pub fn half_width(&self) -> u32 {
        self.effective_width() / 2
    }
}

// =============================================================================
// Point generation helpers
// =============================================================================

/// Generate the pixels of a line using Bresenham's integer algorithm.
///
/// The line connects `(x1, y1)` to `(x2, y2)` inclusively with
/// 8-connectivity. One point is produced per pixel along the major axis, so
/// callers rendering unbounded input clip the segment first.
pub fn generate_line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    if x1 == x2 && y1 == y2 {
        return vec![(x1, y1)];
    }

    let dx = (i64::from(x2) - i64::from(x1)).abs();
    let dy = (i64::from(y2) - i64::from(y1)).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pts = Vec::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        let mut err = dx / 2;
        for i in 0..npts {
            pts.push((x, y));
            if i + 1 == npts {
                break;
            }
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        let mut err = dy / 2;
        for i in 0..npts {
            pts.push((x, y));
            if i + 1 == npts {
                break;
            }
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pts
}

/// Add the parallel offset lines to a center line.
///
/// For `width > 1`, parallel lines are added on alternating sides of the
/// center line: offsets `-1, +1, -2, +2, ...`. An even width therefore
/// reaches one pixel further on the negative side. Offsets run along y when
/// `horizontal`, along x otherwise.
fn widen(base: Vec<(i32, i32)>, horizontal: bool, width: u32) -> Vec<(i32, i32)> {
    let width = width.max(1);
    if width == 1 {
        return base;
    }

    let mut result = Vec::with_capacity(base.len() * width as usize);
    result.extend_from_slice(&base);

    for i in 1..width {
        let magnitude = i.div_ceil(2) as i32;
        let offset = if i % 2 == 1 { -magnitude } else { magnitude };
        if horizontal {
            result.extend(base.iter().map(|&(x, y)| (x, y.saturating_add(offset))));
        } else {
            result.extend(base.iter().map(|&(x, y)| (x.saturating_add(offset), y)));
        }
    }

    result
}

/// Rounded pixel position of a point, or `None` if a coordinate is not
/// finite.
#[inline]
fn pixel_position(p: Point) -> Option<(f64, f64)> {
    p.is_finite().then(|| (f64::from(p.x.round()), f64::from(p.y.round())))
}

/// Inclusive pixel region `[min_x, max_x] x [min_y, max_y]` that strokes
/// are clipped against.
#[derive(Debug, Clone, Copy)]
struct ClipRegion {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl ClipRegion {
    /// Surface extent grown by `pad` pixels on every side.
    fn around(width: u32, height: u32, pad: u32) -> Self {
        let pad = f64::from(pad);
        Self {
            min_x: -pad,
            min_y: -pad,
            max_x: f64::from(width) - 1.0 + pad,
            max_y: f64::from(height) - 1.0 + pad,
        }
    }

    fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Liang-Barsky clip of the segment `a -> b`.
    ///
    /// Endpoints inside the region are returned unchanged.
    fn clip_segment(&self, a: (f64, f64), b: (f64, f64)) -> Option<((f64, f64), (f64, f64))> {
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;

        for (p, q) in [
            (-dx, a.0 - self.min_x),
            (dx, self.max_x - a.0),
            (-dy, a.1 - self.min_y),
            (dy, self.max_y - a.1),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let start = if t0 > 0.0 {
            ((a.0 + t0 * dx).round(), (a.1 + t0 * dy).round())
        } else {
            a
        };
        let end = if t1 < 1.0 {
            ((a.0 + t1 * dx).round(), (a.1 + t1 * dy).round())
        } else {
            b
        };
        Some((start, end))
    }
}

/// Generate the offsets of a filled disc centered on the origin.
pub fn generate_filled_disc_points(radius: u32) -> Vec<(i32, i32)> {
    if radius == 0 {
        return vec![(0, 0)];
    }

    let r = radius as i32;
    let threshold = (radius as f32 + 0.5).powi(2);
    let mut pts = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);

    for dy in -r..=r {
        for dx in -r..=r {
            if (dx * dx + dy * dy) as f32 <= threshold {
                pts.push((dx, dy));
            }
        }
    }

    pts
}

// =============================================================================
// SurfaceMut rendering
// =============================================================================

impl SurfaceMut {
    /// Paint a set of pixels with a color, clipping those off the surface.
    ///
    /// Returns the number of pixels actually written.
    pub fn render_points(&mut self, pts: &[(i32, i32)], color: Rgba) -> usize {
        let pixel = color.to_pixel();
        let mut written = 0;
        for &(x, y) in pts {
            if self.set_pixel_clipped(x, y, pixel) {
                written += 1;
            }
        }
        written
    }

    /// Render one segment of a path.
    ///
    /// The segment is clipped to the surface, grown by the stroke's half
    /// width, before any pixel is generated, so endpoints may lie arbitrarily
    /// far away. A segment touching a non-finite point paints nothing.
    ///
    /// Returns the number of on-surface pixels painted.
    pub fn render_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) -> usize {
        let (Some(a), Some(b)) = (pixel_position(from), pixel_position(to)) else {
            return 0;
        };
        let region = ClipRegion::around(self.width(), self.height(), style.half_width() + 1);
        let mut painted = 0;

        if let Some((start, end)) = region.clip_segment(a, b) {
            let horizontal = (b.0 - a.0).abs() > (b.1 - a.1).abs();
            let base = generate_line_points(
                start.0 as i32,
                start.1 as i32,
                end.0 as i32,
                end.1 as i32,
            );
            let line = widen(base, horizontal, style.effective_width());
            painted += self.render_points(&line, style.color);
        }

        if style.cap == StrokeCap::Round {
            let disc = generate_filled_disc_points(style.half_width());
            for center in [a, b] {
                if !region.contains(center) {
                    continue;
                }
                let (cx, cy) = (center.0 as i32, center.1 as i32);
                let stamp: Vec<_> = disc.iter().map(|&(dx, dy)| (cx + dx, cy + dy)).collect();
                painted += self.render_points(&stamp, style.color);
            }
        }

        painted
    }

    /// Render every segment of a path.
    ///
    /// A path with fewer than two points paints nothing.
    pub fn render_path(&mut self, path: &Path, style: &StrokeStyle) -> usize {
        path.segments()
            .map(|(from, to)| self.render_segment(from, to, style))
            .sum()
    }
}
