//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//!
//! # Pixel packing
//!
//! Pixels are packed MSB-to-LSB within each 32-bit word: pixel 0 of a row
//! occupies bit 31 of the row's first word.

use super::{Pix, PixData, PixMut};
use crate::error::{Error, Result};

#[inline]
fn word_and_mask(data: &PixData, x: u32, y: u32) -> (usize, u32) {
    let index = (y * data.wpl + (x >> 5)) as usize;
    (index, 0x8000_0000u32 >> (x & 31))
}

#[inline]
fn read(data: &PixData, x: u32, y: u32) -> u32 {
    let (index, mask) = word_and_mask(data, x, y);
    u32::from(data.data[index] & mask != 0)
}

impl Pix {
    /// Get a pixel value at (x, y): 1 for ink, 0 for background.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(read(&self.inner, x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`; `x >= width` reads padding bits.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read(&self.inner, x, y)
    }

    /// Check whether the pixel at signed coordinates is ink.
    ///
    /// Coordinates outside the image are background, which lets neighbor
    /// walks step past the border without special cases.
    #[inline]
    pub fn is_foreground(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        matches!(self.get_pixel(x as u32, y as u32), Some(1))
    }
}

impl PixMut {
    /// Set a pixel value at (x, y). Any nonzero `val` sets ink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let (index, mask) = word_and_mask(&self.inner, x, y);
        if val != 0 {
            self.inner.data[index] |= mask;
        } else {
            self.inner.data[index] &= !mask;
        }
    }

    /// Set every pixel inside the rectangle `[x, x+w) x [y, y+h)`, clipped to the image.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, val: u32) {
        let Some(clipped) = crate::Box::new_unchecked(x, y, w, h)
            .clip(self.inner.width as i32, self.inner.height as i32)
        else {
            return;
        };
        for yy in clipped.y..clipped.bottom() {
            for xx in clipped.x..clipped.right() {
                self.set_pixel_unchecked(xx as u32, yy as u32, val);
            }
        }
    }
}
