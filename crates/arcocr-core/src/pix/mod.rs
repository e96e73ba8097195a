//! PIX - The binary image container
//!
//! `Pix` is the image type every stage of the digit engine reads. It holds
//! a 1 bpp mask: a set pixel is glyph ink, a clear pixel is background.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership), so one region can
//! be handed to several readers at once. To modify pixel data, take a
//! `PixMut` copy via [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod clip;
#[cfg(feature = "image")]
mod convert;
mod statistics;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal PIX data
#[derive(Debug, Clone, PartialEq, Eq)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// 32-bit words per line
    wpl: u32,
    /// The image data (packed 32-bit words)
    data: Vec<u32>,
}

impl PixData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = compute_wpl(width);
        Ok(Self {
            width,
            height,
            wpl,
            data: vec![0u32; wpl as usize * height as usize],
        })
    }
}

/// Words per line for a 1 bpp row of `width` pixels.
#[inline]
fn compute_wpl(width: u32) -> u32 {
    width.div_ceil(32)
}

/// PIX - Binary image container
///
/// # Examples
///
/// ```
/// use arcocr_core::Pix;
///
/// let pix = Pix::new(40, 20).unwrap();
/// assert_eq!(pix.width(), 40);
/// assert_eq!(pix.height(), 20);
/// assert_eq!(pix.count_pixels(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// All pixels are background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::zeroed(width, height)?),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a mutable copy of this PIX.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create a new background-only mutable PIX.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixMut {
            inner: PixData::zeroed(width, height)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
