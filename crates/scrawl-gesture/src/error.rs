//! Error types for scrawl-gesture

use thiserror::Error;

/// Errors that can occur while capturing and encoding gestures
#[derive(Debug, Error)]
pub enum GestureError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] scrawl_core::Error),

    /// Transform library error
    #[error("transform error: {0}")]
    Transform(#[from] scrawl_transform::TransformError),

    /// Encode library error
    #[error("encode error: {0}")]
    Encode(#[from] scrawl_encode::EncodeError),

    /// The gesture left no foreground on the surface
    #[error("gesture has no foreground pixels")]
    EmptyGesture,

    /// Drawing surface with a zero dimension
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidSurfaceDimensions { width: u32, height: u32 },

    /// Encoded bitmap does not have the configured shape
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A finalized gesture is still waiting to be processed
    #[error("pipeline busy: a finalized gesture is pending")]
    PipelineBusy,

    /// Sample has no label
    #[error("gesture has no label")]
    MissingLabel,

    /// Classifier scores cannot be mapped to a label
    #[error("invalid scores: {0}")]
    InvalidScores(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization failure
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<std::convert::Infallible> for GestureError {
    fn from(e: std::convert::Infallible) -> Self {
        match e {}
    }
}

/// Result type for gesture operations
pub type GestureResult<T> = Result<T, GestureError>;
