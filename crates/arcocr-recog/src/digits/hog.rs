//! HOG-style glyph descriptor
//!
//! Per-pixel Sobel gradients are binned by orientation into 16 sectors of
//! `[0, 2π)`, weighted by magnitude, and histogrammed over the four
//! quadrants of the glyph. The concatenated 64-bin histogram is mapped to
//! the Hellinger kernel: L1-normalized, square-rooted, then L2-normalized.
//!
//! Quadrant order is top-left, bottom-left, top-right, bottom-right
//! (column-major), so vectors stay comparable with sample sets built the
//! same way.

use crate::error::RecogResult;
use arcocr_core::{FPix, Pix};
use std::f32::consts::TAU;

/// Number of orientation bins per cell
pub const ORIENTATION_BINS: usize = 16;
/// Number of spatial cells
pub const CELLS: usize = 4;
/// Length of every [`FeatureVector`]
pub const FEATURE_LEN: usize = ORIENTATION_BINS * CELLS;

const EPS: f64 = 1e-7;

/// Fixed-length, Hellinger-normalized gradient histogram
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    /// Wrap raw values, e.g. a stored sample
    pub fn from_values(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// The feature values
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector holds no values
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Squared Euclidean distance; extra trailing values of the longer vector are ignored
    pub fn distance_squared(&self, other: &FeatureVector) -> f32 {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

/// 3x3 Sobel derivatives at (`x`, `y`) with reflect-101 borders.
fn sobel(img: &FPix, x: i32, y: i32) -> (f32, f32) {
    let p = |dx: i32, dy: i32| img.get_reflected(x + dx, y + dy);
    let gx = (p(1, -1) + 2.0 * p(1, 0) + p(1, 1)) - (p(-1, -1) + 2.0 * p(-1, 0) + p(-1, 1));
    let gy = (p(-1, 1) + 2.0 * p(0, 1) + p(1, 1)) - (p(-1, -1) + 2.0 * p(0, -1) + p(1, -1));
    (gx, gy)
}

/// Orientation bin of a gradient, angle measured in `[0, 2π)`.
fn orientation_bin(gx: f32, gy: f32) -> usize {
    let mut angle = gy.atan2(gx);
    if angle < 0.0 {
        angle += TAU;
    }
    ((ORIENTATION_BINS as f32 * angle / TAU) as usize).min(ORIENTATION_BINS - 1)
}

/// Extract the descriptor of a normalized glyph image
///
/// Ink is weighted as 255, background as 0. Cells split the image at
/// `width / 2` and `height / 2`.
pub fn extract_features(pix: &Pix) -> RecogResult<FeatureVector> {
    let img = FPix::from_pix(pix, 255.0)?;
    let (w, h) = (img.width() as i32, img.height() as i32);
    let (half_w, half_h) = (w / 2, h / 2);

    let mut hist = [0f64; FEATURE_LEN];
    for y in 0..h {
        for x in 0..w {
            let (gx, gy) = sobel(&img, x, y);
            let mag = (gx * gx + gy * gy).sqrt();
            if mag == 0.0 {
                continue;
            }
            let cell = match (x < half_w, y < half_h) {
                (true, true) => 0,
                (true, false) => 1,
                (false, true) => 2,
                (false, false) => 3,
            };
            hist[cell * ORIENTATION_BINS + orientation_bin(gx, gy)] += mag as f64;
        }
    }

    let sum: f64 = hist.iter().sum();
    for v in hist.iter_mut() {
        *v = (*v / (sum + EPS)).sqrt();
    }
    let norm = hist.iter().map(|v| v * v).sum::<f64>().sqrt();
    Ok(FeatureVector(
        hist.iter().map(|v| (v / (norm + EPS)) as f32).collect(),
    ))
}
