//! Error types for scrawl-encode

use thiserror::Error;

/// Errors that can occur while encoding surfaces and labels
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] scrawl_core::Error),

    /// Bitmap or batch shape differs from the expected one
    #[error("shape mismatch: expected {expected_rows}x{expected_columns}, got {actual_rows}x{actual_columns}")]
    ShapeMismatch {
        expected_rows: u32,
        expected_columns: u32,
        actual_rows: u32,
        actual_columns: u32,
    },

    /// Flat cell buffer length differs from `rows * columns`
    #[error("cell count mismatch: expected {expected}, got {actual}")]
    CellCount { expected: usize, actual: usize },

    /// A cell value other than 0 or 1
    #[error("non-binary cell value {value} at row {row}, column {column}")]
    NonBinaryCell { row: u32, column: u32, value: u8 },

    /// Label id or name outside the known set
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// Invalid parameter provided
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for encode operations
pub type EncodeResult<T> = Result<T, EncodeError>;
