//! Error types for arcocr-recog

use thiserror::Error;

/// Errors that can occur during recognition operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] arcocr_core::Error),

    /// Region library error
    #[error("region error: {0}")]
    Region(#[from] arcocr_region::RegionError),

    /// Transform library error
    #[error("transform error: {0}")]
    Transform(#[from] arcocr_transform::TransformError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No glyph rects survived extraction, repair and filtering
    #[error("no glyphs found")]
    NoGlyphsFound,

    /// The classified labels did not form a decimal number
    #[error("unparsable digit string: {0:?}")]
    UnparsableDigitString(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
