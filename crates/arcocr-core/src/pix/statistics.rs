//! Pixel counting
//!
//! Foreground counts over the whole image, a rectangle, or per column.
//! Column counts drive the waist search that splits touching glyphs.

use super::Pix;
use crate::Box;

impl Pix {
    /// Count the ink pixels in the whole image.
    pub fn count_pixels(&self) -> u64 {
        // Padding bits past `width` are never set, so whole words can be counted.
        self.data().iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Count the ink pixels inside a rectangle (clipped to the image).
    pub fn count_pixels_in_rect(&self, region: &Box) -> u64 {
        let Some(clipped) = region.clip(self.width() as i32, self.height() as i32) else {
            return 0;
        };
        let mut count = 0u64;
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                count += u64::from(self.get_pixel_unchecked(x as u32, y as u32));
            }
        }
        count
    }

    /// Count ink pixels for each column in `[x_start, x_end)` over rows `[y_start, y_end)`.
    ///
    /// The ranges are clipped to the image; the returned vector has one
    /// entry per column of the clipped horizontal range.
    pub fn column_counts(&self, x_start: i32, x_end: i32, y_start: i32, y_end: i32) -> Vec<u32> {
        let x0 = x_start.max(0);
        let x1 = x_end.min(self.width() as i32);
        let y0 = y_start.max(0);
        let y1 = y_end.min(self.height() as i32);
        if x0 >= x1 {
            return Vec::new();
        }
        (x0..x1)
            .map(|x| {
                (y0..y1)
                    .map(|y| self.get_pixel_unchecked(x as u32, y as u32))
                    .sum()
            })
            .collect()
    }
}
