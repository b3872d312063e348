//! I/O error types
//!
//! Every format module maps its underlying library errors into `IoError`
//! variants so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for surface and bitmap I/O
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A format decoder returned an error or the data is malformed
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] scrawl_core::Error),

    /// Decoded cells do not form a valid bitmap
    #[error("bitmap error: {0}")]
    Bitmap(#[from] scrawl_encode::EncodeError),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
