//! Image scaling by nearest-neighbor sampling
//!
//! Destination pixel `(x, y)` takes source pixel
//! `(floor(x * sw / dw), floor(y * sh / dh))`, so binary images stay binary
//! and thin strokes are never blurred away.

use crate::{TransformError, TransformResult};
use arcocr_core::{Pix, PixMut};

/// Scale an image to a specific size
///
/// # Arguments
/// * `pix` - Input image
/// * `width` - Target width (0 to maintain aspect ratio)
/// * `height` - Target height (0 to maintain aspect ratio)
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if both sizes are 0.
pub fn scale_to_size(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    let (sw, sh) = (pix.width(), pix.height());
    let (dw, dh) = match (width, height) {
        (0, 0) => {
            return Err(TransformError::InvalidParameters(
                "target width and height cannot both be 0".into(),
            ));
        }
        (0, h) => (proportional(sw, h, sh), h),
        (w, 0) => (w, proportional(sh, w, sw)),
        (w, h) => (w, h),
    };

    if dw == sw && dh == sh {
        return Ok(pix.clone());
    }

    let mut out = PixMut::new(dw, dh)?;
    let src_x: Vec<u32> = (0..dw)
        .map(|x| sample_index(x, sw, dw))
        .collect();
    for y in 0..dh {
        let sy = sample_index(y, sh, dh);
        for (x, &sx) in src_x.iter().enumerate() {
            if pix.get_pixel_unchecked(sx, sy) != 0 {
                out.set_pixel_unchecked(x as u32, y, 1);
            }
        }
    }
    Ok(out.into())
}

/// `round(len * target / reference)`, at least 1
fn proportional(len: u32, target: u32, reference: u32) -> u32 {
    ((len as f64 * target as f64 / reference as f64).round() as u32).max(1)
}

#[inline]
fn sample_index(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    ((dst as u64 * src_len as u64 / dst_len as u64) as u32).min(src_len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(w: u32, h: u32) -> Pix {
        let mut pm = PixMut::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                pm.set_pixel_unchecked(x, y, (x + y) % 2);
            }
        }
        pm.into()
    }

    #[test]
    fn test_upscale_replicates() {
        let pix = checker(2, 2);
        let up = scale_to_size(&pix, 4, 4).unwrap();
        assert_eq!(up.get_pixel(0, 0), Some(0));
        assert_eq!(up.get_pixel(1, 1), Some(0));
        assert_eq!(up.get_pixel(2, 0), Some(1));
        assert_eq!(up.get_pixel(3, 1), Some(1));
        assert_eq!(up.count_pixels(), 8);
    }

    #[test]
    fn test_downscale_samples() {
        let pix = checker(4, 4);
        let down = scale_to_size(&pix, 2, 2).unwrap();
        // Samples source (0,0), (2,0), (0,2), (2,2): all even parity.
        assert_eq!(down.count_pixels(), 0);
    }

    #[test]
    fn test_keep_aspect() {
        let pix = Pix::new(10, 4).unwrap();
        let s = scale_to_size(&pix, 20, 0).unwrap();
        assert_eq!((s.width(), s.height()), (20, 8));
        let s = scale_to_size(&pix, 0, 2).unwrap();
        assert_eq!((s.width(), s.height()), (5, 2));
        assert!(scale_to_size(&pix, 0, 0).is_err());
    }
}
