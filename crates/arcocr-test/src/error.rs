//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// A synthetic fixture could not be built
    #[error("failed to build fixture: {0}")]
    Fixture(String),

    /// Digit outside 0-9 requested from the glyph font
    #[error("no glyph for digit {0}")]
    UnknownDigit(u8),

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Pix comparison failed
    #[error("pix comparison failed at index {index}")]
    PixMismatch { index: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
