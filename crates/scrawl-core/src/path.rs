//! Point, Path - Recorded pointer positions
//!
//! A [`Path`] is the ordered sequence of pointer samples captured for one
//! gesture. Insertion order defines stroke order and is never changed;
//! points are immutable once recorded.
//!
//! Both types serialize with serde: a point as `{"x": .., "y": ..}` and a
//! path as a plain JSON array of points.

use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/// A pointer position relative to the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    ///
    /// Coordinates may be negative or beyond the surface; clipping happens
    /// at render time. Segments touching a non-finite point are not drawn.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Ordered sequence of points for one gesture.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a path holding a single starting point.
    pub fn starting_at(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Create a path with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// First recorded point.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Most recently recorded point.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Append a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// All points as a slice, in stroke order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over points in stroke order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Iterate over consecutive point pairs.
    ///
    /// A path with fewer than two points has no segments.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            inner: self.points.windows(2),
        }
    }

    /// Integer bounding box of the finite points, or `None` if there are
    /// none.
    ///
    /// The box spans the rounded pixel positions inclusively, so a single
    /// point yields a 1x1 box. Coordinates beyond the `i32` range saturate.
    pub fn bounds(&self) -> Option<Rect> {
        let mut pixels = self
            .points
            .iter()
            .filter(|p| p.is_finite())
            .map(|p| (p.x.round() as i32, p.y.round() as i32));
        let (x0, y0) = pixels.next()?;
        let (mut minx, mut miny, mut maxx, mut maxy) = (x0, y0, x0, y0);
        for (x, y) in pixels {
            minx = minx.min(x);
            miny = miny.min(y);
            maxx = maxx.max(x);
            maxy = maxy.max(y);
        }
        Some(Rect::new_unchecked(
            minx,
            miny,
            maxx.saturating_sub(minx).saturating_add(1),
            maxy.saturating_sub(miny).saturating_add(1),
        ))
    }
}

/// Iterator over consecutive point pairs of a [`Path`].
pub struct Segments<'a> {
    inner: std::slice::Windows<'a, Point>,
}

impl Iterator for Segments<'_> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|w| (w[0], w[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}
