//! Error types for arcocr-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] arcocr_core::Error),

    /// Border tracing started on a background pixel
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: i32, y: i32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
