//! scrawl-encode - Bitmap encoding and training data
//!
//! This crate turns a resampled surface into the classifier's input and
//! assembles labeled samples for training:
//!
//! - **Binarization**: one 0/1 cell per pixel, 1 iff alpha > 0
//! - **Bitmap**: fixed `rows x columns` grid, exported nested or flat
//! - **Labels**: the closed set of shape categories and one-hot vectors
//! - **Batches**: `[N, rows, columns, 1]` inputs with one-hot labels
//!
//! # Example
//!
//! ```
//! use scrawl_core::SurfaceMut;
//! use scrawl_encode::binarize;
//!
//! let mut m = SurfaceMut::new(4, 4).unwrap();
//! m.set_pixel(1, 2, 0x0000_00FF).unwrap();
//! let bitmap = binarize(&m.into());
//! assert_eq!(bitmap.get(2, 1), Some(1));
//! ```

pub mod batch;
pub mod binarize;
pub mod bitmap;
mod error;
pub mod label;

pub use batch::{TrainingBatch, TrainingSet};
pub use binarize::{binarize, binarize_exact};
pub use bitmap::{Bitmap, NestedCells};
pub use error::{EncodeError, EncodeResult};
pub use label::Label;
