//! Rectangle clipping and border operations
//!
//! Cropping a rect out of a region and padding a glyph with background
//! are the two copies the engine makes of caller-owned images.

use super::{Pix, PixMut};
use crate::Box;
use crate::error::{Error, Result};

impl Pix {
    /// Extract a rectangular sub-region from the image.
    ///
    /// The rectangle is clipped to the image bounds first, so a rect that
    /// hangs over the border yields the visible part only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyClip`] if the rectangle does not intersect
    /// the image.
    pub fn clip_rectangle(&self, region: &Box) -> Result<Pix> {
        let clipped = region
            .clip(self.width() as i32, self.height() as i32)
            .ok_or(Error::EmptyClip {
                x: region.x,
                y: region.y,
                w: region.w,
                h: region.h,
            })?;

        let mut out = PixMut::new(clipped.w as u32, clipped.h as u32)?;
        for dy in 0..clipped.h {
            for dx in 0..clipped.w {
                let v = self.get_pixel_unchecked((clipped.x + dx) as u32, (clipped.y + dy) as u32);
                if v != 0 {
                    out.set_pixel_unchecked(dx as u32, dy as u32, 1);
                }
            }
        }
        Ok(out.into())
    }

    /// Add a background border of possibly different width on each side.
    pub fn add_border_general(&self, left: u32, right: u32, top: u32, bottom: u32) -> Result<Pix> {
        let width = self.width() + left + right;
        let height = self.height() + top + bottom;
        let mut out = PixMut::new(width, height)?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.get_pixel_unchecked(x, y) != 0 {
                    out.set_pixel_unchecked(x + left, y + top, 1);
                }
            }
        }
        Ok(out.into())
    }

    /// Add a background border of `npix` pixels on all sides.
    pub fn add_border(&self, npix: u32) -> Result<Pix> {
        self.add_border_general(npix, npix, npix, npix)
    }
}
