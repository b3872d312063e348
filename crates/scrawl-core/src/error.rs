//! Error types for scrawl-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal buffer layout.

use thiserror::Error;

/// scrawl-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid surface dimensions
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Surface dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No pixel with non-zero alpha was found
    #[error("surface has no foreground pixels")]
    EmptyForeground,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scrawl-core operations
pub type Result<T> = std::result::Result<T, Error>;
