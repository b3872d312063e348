//! Binarizer / grid encoder
//!
//! Maps a resampled surface to a [`Bitmap`]: a cell is 1 iff the pixel at
//! the same row and column has non-zero alpha, i.e.
//! `cell = ceil(alpha / 255)`.

use crate::{Bitmap, EncodeError, EncodeResult};
use scrawl_core::Surface;
use scrawl_core::color;

/// Encode one pixel's coverage as a binary cell.
#[inline]
pub fn cell_value(pixel: u32) -> u8 {
    color::alpha(pixel).div_ceil(255)
}

/// Binarize a surface into a bitmap of the same size.
///
/// Row `r`, column `c` of the bitmap is pixel `(x = c, y = r)` of the
/// surface, so the grid is never transposed.
pub fn binarize(surface: &Surface) -> Bitmap {
    let cells: Vec<u8> = surface.data().iter().map(|&p| cell_value(p)).collect();
    Bitmap::from_raw(surface.height(), surface.width(), cells)
}

/// Binarize a surface that must already be `rows x columns`.
///
/// # Errors
///
/// Returns [`EncodeError::ShapeMismatch`] if the surface has a different
/// size.
pub fn binarize_exact(surface: &Surface, rows: u32, columns: u32) -> EncodeResult<Bitmap> {
    if surface.height() != rows || surface.width() != columns {
        return Err(EncodeError::ShapeMismatch {
            expected_rows: rows,
            expected_columns: columns,
            actual_rows: surface.height(),
            actual_columns: surface.width(),
        });
    }
    Ok(binarize(surface))
}
