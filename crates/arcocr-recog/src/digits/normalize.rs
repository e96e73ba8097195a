//! Glyph normalization
//!
//! Each repaired rect is cropped from the region and fitted into a square
//! canvas (default 20x20) so that every glyph reaches the feature
//! extractor at the same size.

use crate::error::RecogResult;
use arcocr_core::{Box, Pix};
use arcocr_transform::resize_fill_square;

/// Default side of the square glyph canvas
pub const DEFAULT_TARGET_SIZE: u32 = 20;

/// A normalized `target x target` glyph and the rect it was cropped from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pix: Pix,
    rect: Box,
}

impl Glyph {
    /// Crop `rect` out of `region` and normalize it
    ///
    /// The rect is clipped to the region first.
    ///
    /// # Errors
    ///
    /// Fails if the rect lies entirely outside the region or `target` is 0.
    pub fn from_region(region: &Pix, rect: &Box, target: u32) -> RecogResult<Self> {
        let crop = region.clip_rectangle(rect)?;
        Ok(Self {
            pix: resize_fill_square(&crop, target)?,
            rect: *rect,
        })
    }

    /// Normalize an already-cropped glyph image
    pub fn from_crop(crop: &Pix, target: u32) -> RecogResult<Self> {
        Ok(Self {
            pix: resize_fill_square(crop, target)?,
            rect: Box::new_unchecked(0, 0, crop.width() as i32, crop.height() as i32),
        })
    }

    /// The normalized square image
    pub fn pix(&self) -> &Pix {
        &self.pix
    }

    /// The rect in region coordinates this glyph came from
    pub fn rect(&self) -> &Box {
        &self.rect
    }
}
