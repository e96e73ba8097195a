//! arcocr-transform - Geometric transformations for arcocr
//!
//! This crate provides the transformations used to normalize glyphs:
//!
//! - Nearest-neighbor scaling to an exact size
//! - Aspect-preserving fit into a square canvas with centered padding

mod error;
pub mod scale;
pub mod square;

pub use error::{TransformError, TransformResult};
pub use scale::scale_to_size;
pub use square::{fit_size, resize_fill_square};
