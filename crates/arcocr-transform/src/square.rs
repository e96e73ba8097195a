//! Fit an image into a square canvas
//!
//! The longer side is scaled to exactly `target`, the shorter side
//! proportionally, and the result is centered on a `target x target`
//! background canvas. With odd padding the extra column or row goes after
//! the image (right or bottom).

use crate::scale::scale_to_size;
use crate::{TransformError, TransformResult};
use arcocr_core::Pix;

/// Size of an image of `width x height` after scaling its longer side to `target`
///
/// The shorter side becomes `round(short * target / long)`, at least 1.
pub fn fit_size(width: u32, height: u32, target: u32) -> (u32, u32) {
    let fit = |short: u32, long: u32| {
        ((short as f64 * target as f64 / long as f64).round() as u32).clamp(1, target)
    };
    if width >= height {
        (target, fit(height, width))
    } else {
        (fit(width, height), target)
    }
}

/// Scale `pix` to fit `target x target` and pad it to a square
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `target` is 0.
pub fn resize_fill_square(pix: &Pix, target: u32) -> TransformResult<Pix> {
    if target == 0 {
        return Err(TransformError::InvalidParameters(
            "square target size must be positive".into(),
        ));
    }
    let (w, h) = fit_size(pix.width(), pix.height(), target);
    let scaled = scale_to_size(pix, w, h)?;

    let left = (target - w) / 2;
    let top = (target - h) / 2;
    let padded = scaled.add_border_general(left, target - w - left, top, target - h - top)?;
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcocr_core::PixMut;

    #[test]
    fn test_fit_size() {
        assert_eq!(fit_size(10, 20, 20), (10, 20));
        assert_eq!(fit_size(9, 18, 20), (10, 20));
        assert_eq!(fit_size(18, 10, 20), (20, 11));
        assert_eq!(fit_size(1, 100, 20), (1, 20));
        assert_eq!(fit_size(40, 40, 20), (20, 20));
    }

    #[test]
    fn test_tall_glyph_is_centered() {
        let mut pm = PixMut::new(3, 10).unwrap();
        pm.fill_rect(0, 0, 3, 10, 1);
        let pix: Pix = pm.into();
        let sq = resize_fill_square(&pix, 20).unwrap();
        assert_eq!((sq.width(), sq.height()), (20, 20));
        // 3x10 -> 6x20, padded 7 left and 7 right
        assert_eq!(sq.count_pixels(), 120);
        assert_eq!(sq.get_pixel(6, 0), Some(0));
        assert_eq!(sq.get_pixel(7, 0), Some(1));
        assert_eq!(sq.get_pixel(12, 19), Some(1));
        assert_eq!(sq.get_pixel(13, 19), Some(0));
    }

    #[test]
    fn test_odd_padding_goes_after() {
        let mut pm = PixMut::new(10, 3).unwrap();
        pm.fill_rect(0, 0, 10, 3, 1);
        let pix: Pix = pm.into();
        // 10x3 -> 20x6, padded 7 top and 7 bottom
        let sq = resize_fill_square(&pix, 20).unwrap();
        assert_eq!(sq.get_pixel(0, 6), Some(0));
        assert_eq!(sq.get_pixel(0, 7), Some(1));
        assert_eq!(sq.get_pixel(0, 12), Some(1));
        assert_eq!(sq.get_pixel(0, 13), Some(0));

        let mut pm = PixMut::new(20, 5).unwrap();
        pm.fill_rect(0, 0, 20, 5, 1);
        let pix: Pix = pm.into();
        // 20x5 stays, padded 7 top and 8 bottom
        let sq = resize_fill_square(&pix, 20).unwrap();
        assert_eq!(sq.get_pixel(0, 6), Some(0));
        assert_eq!(sq.get_pixel(0, 7), Some(1));
        assert_eq!(sq.get_pixel(0, 11), Some(1));
        assert_eq!(sq.get_pixel(0, 12), Some(0));
    }

    #[test]
    fn test_zero_target() {
        let pix = Pix::new(3, 3).unwrap();
        assert!(resize_fill_square(&pix, 0).is_err());
    }
}
