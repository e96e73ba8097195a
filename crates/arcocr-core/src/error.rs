//! Error types for arcocr-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// arcocr core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate outside the image
    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Rectangle does not intersect the image
    #[error("rectangle {x},{y} {w}x{h} does not intersect the image")]
    EmptyClip { x: i32, y: i32, w: i32, h: i32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
