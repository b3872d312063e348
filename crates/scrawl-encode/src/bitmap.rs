//! Bitmap - the fixed-size binary grid fed to the classifier
//!
//! Cells are stored row-major, row 0 at the top and column 0 at the left.
//! Every cell is 0 (background) or 1 (stroke).
//!
//! The serialized form is the `rows x columns x 1` nested array the
//! classifier input layer expects, e.g. `[[[0],[1]],[[1],[0]]]`.

use crate::{EncodeError, EncodeResult};
use scrawl_core::color::Rgba;
use scrawl_core::{Surface, SurfaceMut};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nested `rows x columns x 1` representation of a bitmap
pub type NestedCells = Vec<Vec<[u8; 1]>>;

/// Fixed `rows x columns` grid of 0/1 cells
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NestedCells", into = "NestedCells")]
pub struct Bitmap {
    rows: u32,
    columns: u32,
    cells: Vec<u8>,
}

impl Bitmap {
    /// Create an all-zero bitmap
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidParameters`] if either dimension is 0.
    pub fn new(rows: u32, columns: u32) -> EncodeResult<Self> {
        let len = checked_len(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![0; len],
        })
    }

    /// Create a bitmap from a flat row-major cell buffer
    pub fn from_cells(rows: u32, columns: u32, cells: Vec<u8>) -> EncodeResult<Self> {
        let expected = checked_len(rows, columns)?;
        if cells.len() != expected {
            return Err(EncodeError::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        if let Some(i) = cells.iter().position(|&v| v > 1) {
            return Err(EncodeError::NonBinaryCell {
                row: i as u32 / columns,
                column: i as u32 % columns,
                value: cells[i],
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Wrap cells already known to be binary and of length `rows * columns`.
    pub(crate) fn from_raw(rows: u32, columns: u32, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows as usize * columns as usize);
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Create a bitmap from a slice of rows
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::ShapeMismatch`] if the rows are ragged and
    /// [`EncodeError::NonBinaryCell`] for a value other than 0 or 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> EncodeResult<Self> {
        let n_rows = rows.len() as u32;
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        let mut cells = Vec::with_capacity(n_rows as usize * n_cols as usize);
        for row in rows {
            let row = row.as_ref();
            if row.len() as u32 != n_cols {
                return Err(EncodeError::ShapeMismatch {
                    expected_rows: n_rows,
                    expected_columns: n_cols,
                    actual_rows: n_rows,
                    actual_columns: row.len() as u32,
                });
            }
            cells.extend_from_slice(row);
        }
        Self::from_cells(n_rows, n_cols, cells)
    }

    /// Create a bitmap from its nested `rows x columns x 1` form
    pub fn from_nested(nested: &[Vec<[u8; 1]>]) -> EncodeResult<Self> {
        let rows: Vec<Vec<u8>> = nested
            .iter()
            .map(|row| row.iter().map(|c| c[0]).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Flat row-major cells
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Get the cell at `(row, column)`, or `None` if out of bounds
    pub fn get(&self, row: u32, column: u32) -> Option<u8> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.cells[(row * self.columns + column) as usize])
    }

    /// Check whether the cell at `(row, column)` is set
    pub fn is_set(&self, row: u32, column: u32) -> bool {
        self.get(row, column) == Some(1)
    }

    /// Set or clear the cell at `(row, column)`
    pub fn set(&mut self, row: u32, column: u32, on: bool) -> EncodeResult<()> {
        if row >= self.rows || column >= self.columns {
            return Err(scrawl_core::Error::IndexOutOfBounds {
                index: (row as usize) * self.columns as usize + column as usize,
                len: self.cells.len(),
            }
            .into());
        }
        self.cells[(row * self.columns + column) as usize] = on as u8;
        Ok(())
    }

    /// Number of set cells
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Fail unless the bitmap is exactly `rows x columns`
    pub fn ensure_shape(&self, rows: u32, columns: u32) -> EncodeResult<()> {
        if self.rows != rows || self.columns != columns {
            return Err(EncodeError::ShapeMismatch {
                expected_rows: rows,
                expected_columns: columns,
                actual_rows: self.rows,
                actual_columns: self.columns,
            });
        }
        Ok(())
    }

    /// Nested `rows x columns x 1` form
    pub fn to_nested(&self) -> NestedCells {
        self.cells
            .chunks(self.columns as usize)
            .map(|row| row.iter().map(|&c| [c]).collect())
            .collect()
    }

    /// Flat row-major cells as `f32`, ready to be copied into a tensor
    pub fn to_f32(&self) -> Vec<f32> {
        self.cells.iter().map(|&c| c as f32).collect()
    }

    /// Render the bitmap as a `columns x rows` surface: set cells become
    /// opaque `ink`, clear cells transparent.
    pub fn to_surface_with(&self, ink: Rgba) -> EncodeResult<Surface> {
        let mut surface = SurfaceMut::new(self.columns, self.rows)?;
        let pixel = ink.to_pixel();
        for (dst, &c) in surface.data_mut().iter_mut().zip(&self.cells) {
            if c == 1 {
                *dst = pixel;
            }
        }
        Ok(surface.into())
    }

    /// Render the bitmap as a surface with opaque black ink
    pub fn to_surface(&self) -> EncodeResult<Surface> {
        self.to_surface_with(Rgba::BLACK)
    }

    /// ASCII rendering, `#` for set cells and `.` for clear ones
    pub fn ascii_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.columns as usize)
            .map(|row| row.iter().map(|&c| if c == 1 { '#' } else { '.' }).collect())
            .collect()
    }
}

fn checked_len(rows: u32, columns: u32) -> EncodeResult<usize> {
    if rows == 0 || columns == 0 {
        return Err(EncodeError::InvalidParameters(format!(
            "bitmap must be non-empty, got {}x{}",
            rows, columns
        )));
    }
    (rows as usize)
        .checked_mul(columns as usize)
        .ok_or_else(|| EncodeError::InvalidParameters(format!("bitmap {}x{} too large", rows, columns)))
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.ascii_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl TryFrom<NestedCells> for Bitmap {
    type Error = EncodeError;

    fn try_from(nested: NestedCells) -> EncodeResult<Self> {
        Self::from_nested(&nested)
    }
}

impl From<Bitmap> for NestedCells {
    fn from(bitmap: Bitmap) -> Self {
        bitmap.to_nested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let b = Bitmap::new(28, 28).unwrap();
        assert_eq!((b.rows(), b.columns()), (28, 28));
        assert_eq!(b.count_ones(), 0);
        assert!(Bitmap::new(0, 28).is_err());
    }

    #[test]
    fn test_from_rows_and_get() {
        let b = Bitmap::from_rows(&[[0u8, 1, 1], [1, 0, 0]]).unwrap();
        assert_eq!((b.rows(), b.columns()), (2, 3));
        assert_eq!(b.get(0, 1), Some(1));
        assert_eq!(b.get(1, 0), Some(1));
        assert_eq!(b.get(1, 1), Some(0));
        assert_eq!(b.get(2, 0), None);
        assert_eq!(b.count_ones(), 3);
        assert_eq!(b.ascii_rows(), [".##", "#.."]);
    }

    #[test]
    fn test_construction_errors() {
        let ragged: [&[u8]; 2] = [&[0, 1], &[1]];
        assert!(matches!(
            Bitmap::from_rows(&ragged),
            Err(EncodeError::ShapeMismatch { actual_columns: 1, .. })
        ));
        assert!(matches!(
            Bitmap::from_cells(2, 2, vec![0, 1, 2, 0]),
            Err(EncodeError::NonBinaryCell {
                row: 1,
                column: 0,
                value: 2
            })
        ));
        assert!(matches!(
            Bitmap::from_cells(2, 2, vec![0, 1, 1]),
            Err(EncodeError::CellCount {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_ensure_shape() {
        let b = Bitmap::new(28, 28).unwrap();
        assert!(b.ensure_shape(28, 28).is_ok());
        assert!(matches!(
            b.ensure_shape(100, 100),
            Err(EncodeError::ShapeMismatch {
                expected_rows: 100,
                actual_rows: 28,
                ..
            })
        ));
    }

    #[test]
    fn test_set() {
        let mut b = Bitmap::new(3, 4).unwrap();
        b.set(2, 3, true).unwrap();
        assert!(b.is_set(2, 3));
        b.set(2, 3, false).unwrap();
        assert_eq!(b.count_ones(), 0);
        assert!(b.set(3, 0, true).is_err());
    }

    #[test]
    fn test_nested_and_f32() {
        let b = Bitmap::from_rows(&[[0u8, 1], [1, 1]]).unwrap();
        assert_eq!(b.to_nested(), vec![vec![[0], [1]], vec![[1], [1]]]);
        assert_eq!(b.to_f32(), vec![0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_serde_nested_shape() {
        let b = Bitmap::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[[[0],[1]],[[1],[0]]]");
        let back: Bitmap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        assert!(serde_json::from_str::<Bitmap>("[[[0],[3]]]").is_err());
        assert!(serde_json::from_str::<Bitmap>("[]").is_err());
    }

    #[test]
    fn test_to_surface() {
        let b = Bitmap::from_rows(&[[1u8, 0, 0], [0, 0, 1]]).unwrap();
        let s = b.to_surface().unwrap();
        assert_eq!((s.width(), s.height()), (3, 2));
        assert!(s.is_foreground(0, 0));
        assert!(s.is_foreground(2, 1));
        assert_eq!(s.count_foreground(), 2);
    }
}
