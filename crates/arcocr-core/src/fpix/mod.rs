//! FPix - Floating-point image
//!
//! `FPix` is a 2D array of `f32` values, used for gradient computations on
//! normalized glyphs where integer precision is insufficient.
//!
//! # Examples
//!
//! ```
//! use arcocr_core::FPix;
//!
//! let fpix = FPix::new(20, 20).unwrap();
//! assert_eq!(fpix.get_reflected(-1, 5), 0.0);
//! ```

use crate::error::{Error, Result};
use crate::pix::Pix;

/// Floating-point image
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FPix {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl FPix {
    /// Create a new FPix with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(FPix {
            width,
            height,
            data: vec![0.0f32; width as usize * height as usize],
        })
    }

    /// Convert a binary image: ink becomes `fg_value`, background 0.0.
    pub fn from_pix(pix: &Pix, fg_value: f32) -> Result<Self> {
        let mut out = FPix::new(pix.width(), pix.height())?;
        for y in 0..pix.height() {
            for x in 0..pix.width() {
                if pix.get_pixel_unchecked(x, y) != 0 {
                    out.data[(y * out.width + x) as usize] = fg_value;
                }
            }
        }
        Ok(out)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a pixel with mirrored borders that do not repeat the edge sample.
    ///
    /// Index -1 maps to 1 and index `width` maps to `width - 2`
    /// (`gfedcb|abcdefgh|gfedcba`). A one-pixel-wide axis always maps to 0.
    pub fn get_reflected(&self, x: i32, y: i32) -> f32 {
        let xr = reflect_101(x, self.width as i32);
        let yr = reflect_101(y, self.height as i32);
        self.data[(yr as u32 * self.width + xr as u32) as usize]
    }
}

fn reflect_101(mut i: i32, len: i32) -> i32 {
    if len == 1 {
        return 0;
    }
    loop {
        if i < 0 {
            i = -i;
        } else if i >= len {
            i = 2 * len - i - 2;
        } else {
            return i;
        }
    }
}
