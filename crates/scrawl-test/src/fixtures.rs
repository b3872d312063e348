//! Fixture builders for surfaces

use crate::error::{TestError, TestResult};
use scrawl_core::color::Rgba;
use scrawl_core::{Path, Point, StrokeStyle, Surface, SurfaceMut, SurfaceSize};

/// Build a surface from ASCII art.
///
/// `#` is an opaque ink pixel, `.` is transparent background. Every row
/// must have the same length.
pub fn surface_from_ascii(rows: &[&str]) -> TestResult<Surface> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut surface = SurfaceMut::new(width as u32, height as u32)?;
    let ink = Rgba::BLACK.to_pixel();

    for (y, row) in rows.iter().enumerate() {
        let actual = row.chars().count();
        if actual != width {
            return Err(TestError::RaggedFixture {
                row: y,
                expected: width,
                actual,
            });
        }
        for (x, ch) in row.chars().enumerate() {
            match ch {
                '#' => surface.set_pixel_unchecked(x as u32, y as u32, ink),
                '.' => {}
                _ => return Err(TestError::UnknownCharacter { ch, x, y }),
            }
        }
    }

    Ok(surface.into())
}

/// Render a surface as ASCII art, the inverse of [`surface_from_ascii`].
///
/// Any pixel with non-zero alpha prints as `#`.
pub fn ascii_rows(surface: &Surface) -> Vec<String> {
    (0..surface.height())
        .map(|y| {
            (0..surface.width())
                .map(|x| if surface.is_foreground(x, y) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// Render a polyline through `points` on a fresh surface.
pub fn stroke_surface(
    size: SurfaceSize,
    points: &[(f32, f32)],
    style: &StrokeStyle,
) -> TestResult<Surface> {
    let path: Path = points.iter().copied().map(Point::from).collect();
    let mut surface = SurfaceMut::new(size.width, size.height)?;
    surface.render_path(&path, style);
    Ok(surface.into())
}
