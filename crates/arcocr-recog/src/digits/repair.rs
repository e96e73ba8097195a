//! Rect repair heuristics
//!
//! Contour bounding boxes rarely map one-to-one onto digits. Anti-aliasing
//! breaks a glyph into stacked fragments, and tight kerning fuses two glyphs
//! into one blob. [`connect_broken`] merges fragments that share a column
//! span; [`split_connected`] cuts over-wide rects at their thinnest column.
//!
//! Both functions take rects by slice and return new vectors. They clamp or
//! skip out-of-range geometry and never fail.

use crate::error::{RecogError, RecogResult};
use arcocr_core::{Box, Pix};
use tracing::{debug, trace};

/// Options for [`connect_broken`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectBrokenOptions {
    /// Fixed edge tolerance in pixels; `None` derives it from the image width
    pub tolerance: Option<i32>,

    /// Tolerance as a fraction of the image width, rounded up (default: 0.08)
    pub tolerance_ratio: f64,

    /// Minimum anchor height as a fraction of the image height (default: 0.1)
    pub min_height_ratio: f64,

    /// Maximum anchor height as a fraction of the image height (default: 0.6)
    pub max_height_ratio: f64,
}

impl Default for ConnectBrokenOptions {
    fn default() -> Self {
        Self {
            tolerance: None,
            tolerance_ratio: 0.08,
            min_height_ratio: 0.1,
            max_height_ratio: 0.6,
        }
    }
}

impl ConnectBrokenOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed tolerance in pixels
    pub fn with_tolerance(mut self, tolerance: i32) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the width-relative tolerance
    pub fn with_tolerance_ratio(mut self, ratio: f64) -> Self {
        self.tolerance_ratio = ratio;
        self
    }

    /// Set the anchor height range, as fractions of the image height
    pub fn with_height_range(mut self, min_ratio: f64, max_ratio: f64) -> Self {
        self.min_height_ratio = min_ratio;
        self.max_height_ratio = max_ratio;
        self
    }

    /// Edge tolerance in pixels for an image `image_width` wide
    pub fn tolerance_for(&self, image_width: u32) -> i32 {
        self.tolerance
            .unwrap_or_else(|| (image_width as f64 * self.tolerance_ratio).ceil() as i32)
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if matches!(self.tolerance, Some(t) if t < 0) {
            return Err(RecogError::InvalidParameter(
                "tolerance must be non-negative".to_string(),
            ));
        }
        if !(self.tolerance_ratio >= 0.0) {
            return Err(RecogError::InvalidParameter(
                "tolerance_ratio must be non-negative".to_string(),
            ));
        }
        if !(self.min_height_ratio >= 0.0 && self.min_height_ratio <= self.max_height_ratio) {
            return Err(RecogError::InvalidParameter(
                "anchor height range must satisfy 0 <= min <= max".to_string(),
            ));
        }
        Ok(())
    }
}

/// Options for [`split_connected`]
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConnectedOptions {
    /// Rects with `w / h` above this are split candidates (default: 1.05)
    pub width_height_ratio: f64,

    /// Fraction of the width ignored at each side when searching the waist (default: 0.1)
    pub width_ignore_ratio: f64,

    /// Tied waist columns farther than this many standard deviations from
    /// their mean are dropped (default: 1.5)
    pub outlier_sigma: f64,
}

impl Default for SplitConnectedOptions {
    fn default() -> Self {
        Self {
            width_height_ratio: 1.05,
            width_ignore_ratio: 0.1,
            outlier_sigma: 1.5,
        }
    }
}

impl SplitConnectedOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width/height ratio above which rects are split
    pub fn with_width_height_ratio(mut self, ratio: f64) -> Self {
        self.width_height_ratio = ratio;
        self
    }

    /// Set the fraction of columns ignored at each side
    pub fn with_width_ignore_ratio(mut self, ratio: f64) -> Self {
        self.width_ignore_ratio = ratio;
        self
    }

    /// Set the outlier cutoff for tied waist columns
    pub fn with_outlier_sigma(mut self, sigma: f64) -> Self {
        self.outlier_sigma = sigma;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if !(self.width_height_ratio > 0.0) {
            return Err(RecogError::InvalidParameter(
                "width_height_ratio must be positive".to_string(),
            ));
        }
        if !(0.0..0.5).contains(&self.width_ignore_ratio) {
            return Err(RecogError::InvalidParameter(
                "width_ignore_ratio must be in [0, 0.5)".to_string(),
            ));
        }
        if !(self.outlier_sigma >= 0.0) {
            return Err(RecogError::InvalidParameter(
                "outlier_sigma must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Merge rects that are fragments of one glyph
///
/// A rect whose height is within the anchor range of the image height
/// collects every other rect whose left and right edges are each within
/// the tolerance of its own; the group is replaced by its bounding box.
/// Merged rects are appended after the untouched ones. The pass repeats
/// until nothing merges, so the output is stable under a second call.
pub fn connect_broken(
    rects: &[Box],
    image_width: u32,
    image_height: u32,
    options: &ConnectBrokenOptions,
) -> Vec<Box> {
    let tolerance = options.tolerance_for(image_width);
    let min_h = options.min_height_ratio * image_height as f64;
    let max_h = options.max_height_ratio * image_height as f64;

    let (out, merges, passes) = merge_to_fixpoint(rects, tolerance, min_h, max_h);
    if merges > 0 {
        debug!(
            merges,
            passes,
            tolerance,
            rects_in = rects.len(),
            rects_out = out.len(),
            "connect_broken merged fragments"
        );
    }
    out
}

/// Repeat merge passes until one merges nothing.
///
/// Returns the rects, the total number of merged groups and the number of
/// passes run, the final no-op pass included.
fn merge_to_fixpoint(
    rects: &[Box],
    tolerance: i32,
    min_h: f64,
    max_h: f64,
) -> (Vec<Box>, usize, usize) {
    let mut current = rects.to_vec();
    let mut total = 0;
    let mut passes = 0;
    loop {
        let (next, merges) = connect_pass(&current, tolerance, min_h, max_h);
        passes += 1;
        current = next;
        if merges == 0 {
            return (current, total, passes);
        }
        total += merges;
    }
}

fn connect_pass(rects: &[Box], tolerance: i32, min_h: f64, max_h: f64) -> (Vec<Box>, usize) {
    let mut consumed = vec![false; rects.len()];
    let mut merged = Vec::new();

    for (i, anchor) in rects.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        let h = anchor.h as f64;
        if h < min_h || h > max_h {
            continue;
        }

        let group: Vec<usize> = rects
            .iter()
            .enumerate()
            .filter(|&(j, r)| {
                j != i
                    && !consumed[j]
                    && (r.x - anchor.x).abs() <= tolerance
                    && (r.right() - anchor.right()).abs() <= tolerance
            })
            .map(|(j, _)| j)
            .collect();
        if group.is_empty() {
            continue;
        }

        consumed[i] = true;
        for &j in &group {
            consumed[j] = true;
        }
        let members = std::iter::once(anchor).chain(group.iter().map(|&j| &rects[j]));
        if let Some(union) = Box::union_all(members) {
            trace!(?anchor, members = group.len(), ?union, "merged group");
            merged.push(union);
        }
    }

    let merges = merged.len();
    let mut out: Vec<Box> = rects
        .iter()
        .zip(&consumed)
        .filter(|&(_, &c)| !c)
        .map(|(r, _)| *r)
        .collect();
    out.extend(merged);
    (out, merges)
}

/// Split rects that contain two touching glyphs
///
/// Rects wider than `width_height_ratio * h` are cut at the column with the
/// fewest (but nonzero) ink pixels, ignoring a margin at each side. Rects
/// that are not wide enough, or whose searched columns hold no ink, pass
/// through unchanged.
pub fn split_connected(pix: &Pix, rects: &[Box], options: &SplitConnectedOptions) -> Vec<Box> {
    let mut out = Vec::with_capacity(rects.len());
    for rect in rects {
        match split_column(pix, rect, options).and_then(|x| rect.split_at_x(x)) {
            Some((left, right)) => {
                debug!(?rect, split_x = left.right(), "split_connected cut rect");
                out.push(left);
                out.push(right);
            }
            None => out.push(*rect),
        }
    }
    out
}

/// Absolute x of the waist column of a wide rect, if it should be split.
fn split_column(pix: &Pix, rect: &Box, options: &SplitConnectedOptions) -> Option<i32> {
    if rect.h <= 0 || rect.aspect_ratio() <= options.width_height_ratio {
        return None;
    }

    let ignore = (rect.w as f64 * options.width_ignore_ratio).round() as i32;
    let x0 = (rect.x + ignore).max(0);
    let x1 = (rect.right() - ignore).min(pix.width() as i32);
    let counts = pix.column_counts(x0, x1, rect.y, rect.bottom());

    let Some(&min_count) = counts.iter().filter(|&&c| c > 0).min() else {
        trace!(?rect, "no ink in waist search range, rect kept");
        return None;
    };
    let ties: Vec<f64> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == min_count)
        .map(|(i, _)| i as f64)
        .collect();

    let kept = drop_outliers(&ties, options.outlier_sigma);
    Some(x0 + median(&kept).round() as i32)
}

/// Keep values within `sigma` population standard deviations of the mean.
fn drop_outliers(values: &[f64], sigma: f64) -> Vec<f64> {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
    if std == 0.0 {
        return values.to_vec();
    }
    let kept: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| (v - mean).abs() <= sigma * std)
        .collect();
    if kept.is_empty() {
        values.to_vec()
    } else {
        kept
    }
}

/// Median of ascending values; the mean of the middle pair for even counts.
fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}
