//! Pick one of several candidate masks by ink coverage
//!
//! Categorical fields (rating class, clear status) are read by masking the
//! same region once per candidate color; the candidate whose mask holds the
//! most ink wins.

use arcocr_core::Pix;
use tracing::trace;

/// Index of the mask with the most ink pixels
///
/// Ties go to the earliest mask. Returns `None` for an empty slice or when
/// even the best mask has fewer than `min_count` ink pixels.
pub fn select_by_coverage(masks: &[Pix], min_count: u64) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, mask) in masks.iter().enumerate() {
        let count = mask.count_pixels();
        trace!(index = i, count, "mask coverage");
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((i, count));
        }
    }
    best.filter(|&(_, c)| c >= min_count).map(|(i, _)| i)
}
