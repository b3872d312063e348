//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// ASCII fixture rows have different lengths
    #[error("ragged fixture: row {row} has {actual} columns, expected {expected}")]
    RaggedFixture {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Fixture contains an unknown character
    #[error("unknown fixture character {ch:?} at ({x}, {y})")]
    UnknownCharacter { ch: char, x: usize, y: usize },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] scrawl_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
