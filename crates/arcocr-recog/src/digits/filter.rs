//! Caller-supplied rect filters
//!
//! A filter runs on the repaired rects before glyphs are cropped. It sees
//! each rect together with the region it was found in, so thresholds can be
//! relative to the region size.

use arcocr_core::{Box, Pix};
use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(&Box, &Pix) -> bool + Send + Sync;

/// Predicate deciding which repaired rects are kept
#[derive(Clone)]
pub struct RectFilter {
    predicate: Arc<Predicate>,
}

impl RectFilter {
    /// Filter on the rect alone
    pub fn new(predicate: impl Fn(&Box) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Arc::new(move |rect, _| predicate(rect)),
        }
    }

    /// Filter on the rect and the region it came from
    pub fn with_region(predicate: impl Fn(&Box, &Pix) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Keep rects at least `ratio` of the region height tall
    pub fn min_height_ratio(ratio: f64) -> Self {
        Self::with_region(move |rect, region| rect.h as f64 >= region.height() as f64 * ratio)
    }

    /// Keep rects at least `min_w` wide and `min_h` tall
    pub fn min_size(min_w: i32, min_h: i32) -> Self {
        Self::new(move |rect| rect.w >= min_w && rect.h >= min_h)
    }

    /// Whether `rect`, found in `region`, is kept
    pub fn keeps(&self, rect: &Box, region: &Pix) -> bool {
        (self.predicate)(rect, region)
    }
}

impl fmt::Debug for RectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RectFilter").finish_non_exhaustive()
    }
}
