//! Rect - Rectangle regions
//!
//! Axis-aligned rectangles used for crop boxes.

/// A rectangle region
///
/// `x`/`y` is the top-left corner; `w`/`h` are extents in pixels. The
/// right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a rectangle without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle spanning two corner pixels inclusively
    pub fn from_inclusive(minx: i32, miny: i32, maxx: i32, maxy: i32) -> Self {
        let (x0, x1) = (minx.min(maxx), minx.max(maxx));
        let (y0, y1) = (miny.min(maxy), miny.max(maxy));
        Self {
            x: x0,
            y: y0,
            w: x1 - x0 + 1,
            h: y1 - y0 + 1,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inclusive() {
        let r = Rect::from_inclusive(8, 10, 12, 50);
        assert_eq!((r.x, r.y, r.w, r.h), (8, 10, 5, 41));
        assert_eq!(r.right(), 13);
        assert_eq!(r.bottom(), 51);
        // corner order does not matter
        assert_eq!(Rect::from_inclusive(12, 50, 8, 10), r);
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new_unchecked(-2, 3, 4, 2);
        assert!(r.contains_point(-2, 3));
        assert!(r.contains_point(1, 4));
        assert!(!r.contains_point(2, 4));
        assert!(!r.contains_point(0, 5));
    }
}
