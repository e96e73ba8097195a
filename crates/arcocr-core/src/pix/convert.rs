//! Conversion between `Pix` and 8-bit masks from the `image` crate
//!
//! Region suppliers usually produce their color masks as `GrayImage`s
//! (0 = background, 255 = ink). Any nonzero sample counts as ink here; no
//! thresholding happens in this crate.

use super::{Pix, PixMut};
use crate::error::Result;
use image::{GrayImage, Luma};

impl Pix {
    /// Build a binary image from an 8-bit mask, treating nonzero samples as ink.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] for an empty mask.
    pub fn from_luma_mask(mask: &GrayImage) -> Result<Pix> {
        let (width, height) = mask.dimensions();
        let mut out = PixMut::new(width, height)?;
        for (x, y, px) in mask.enumerate_pixels() {
            if px.0[0] != 0 {
                out.set_pixel_unchecked(x, y, 1);
            }
        }
        Ok(out.into())
    }

    /// Render the image as an 8-bit mask (ink = 255, background = 0).
    pub fn to_luma_mask(&self) -> GrayImage {
        GrayImage::from_fn(self.width(), self.height(), |x, y| {
            Luma([if self.get_pixel_unchecked(x, y) != 0 {
                255
            } else {
                0
            }])
        })
    }
}
