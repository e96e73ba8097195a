//! arcocr Core - Basic data structures for digit recognition
//!
//! This crate provides the fundamental data structures used throughout
//! the arcocr workspace:
//!
//! - [`Pix`] / [`PixMut`] - Binary (1 bpp) image container (immutable / mutable)
//! - [`Box`] / [`Boxa`] - Rectangle regions
//! - [`FPix`] - Floating-point image used for gradient computations
//!
//! Images handed to the engine are already cropped and color-masked:
//! a set pixel (value 1) is ink, a clear pixel (value 0) is background.

pub mod box_;
pub mod error;
pub mod fpix;
pub mod pix;

pub use box_::{Box, Boxa};
pub use error::{Error, Result};
pub use fpix::FPix;
pub use pix::{Pix, PixMut};
