//! Digit recognition pipeline
//!
//! contours -> area pre-filter -> connect broken -> split connected ->
//! rect filter -> normalize -> features -> k-NN -> left-to-right assembly.
//!
//! Every call is a pure function of the region, the options and the model.

use crate::digits::filter::RectFilter;
use crate::digits::hog::extract_features;
use crate::digits::knn::DigitClassifier;
use crate::digits::normalize::{DEFAULT_TARGET_SIZE, Glyph};
use crate::digits::repair::{
    ConnectBrokenOptions, SplitConnectedOptions, connect_broken, split_connected,
};
use crate::error::{RecogError, RecogResult};
use arcocr_core::{Box, Boxa, Pix};
use arcocr_region::find_contours_labeled;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Options for [`recognize_digits`] and [`read_digits`]
#[derive(Debug, Clone)]
pub struct RecognizeOptions {
    /// Fragment merging
    pub connect: ConnectBrokenOptions,

    /// Touching-glyph splitting
    pub split: SplitConnectedOptions,

    /// Side of the normalized glyph canvas (default: 20)
    pub target_size: u32,

    /// Neighbors consulted per glyph (default: 4)
    pub k: usize,

    /// Contours enclosing less polygon area are dropped before repair
    pub min_contour_area: Option<f64>,

    /// Remove the ink of contours dropped by `min_contour_area` before
    /// cropping glyphs (default: false)
    pub erase_dropped_contours: bool,

    /// Predicate applied to repaired rects
    ///
    /// The predicate sees the region as passed in, before any erasing by
    /// `erase_dropped_contours`; glyph crops are taken from the erased mask.
    pub rect_filter: Option<RectFilter>,
}

impl Default for RecognizeOptions {
    fn default() -> Self {
        Self {
            connect: ConnectBrokenOptions::default(),
            split: SplitConnectedOptions::default(),
            target_size: DEFAULT_TARGET_SIZE,
            k: 4,
            min_contour_area: None,
            erase_dropped_contours: false,
            rect_filter: None,
        }
    }
}

impl RecognizeOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fragment merging options
    pub fn with_connect(mut self, connect: ConnectBrokenOptions) -> Self {
        self.connect = connect;
        self
    }

    /// Set the splitting options
    pub fn with_split(mut self, split: SplitConnectedOptions) -> Self {
        self.split = split;
        self
    }

    /// Set the glyph canvas size
    pub fn with_target_size(mut self, size: u32) -> Self {
        self.target_size = size;
        self
    }

    /// Set the number of neighbors
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Drop contours below this polygon area
    pub fn with_min_contour_area(mut self, area: f64) -> Self {
        self.min_contour_area = Some(area);
        self
    }

    /// Erase the ink of dropped contours before cropping
    pub fn with_erase_dropped_contours(mut self, erase: bool) -> Self {
        self.erase_dropped_contours = erase;
        self
    }

    /// Filter repaired rects
    pub fn with_rect_filter(mut self, filter: RectFilter) -> Self {
        self.rect_filter = Some(filter);
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        self.connect.validate()?;
        self.split.validate()?;
        if self.target_size < 2 {
            return Err(RecogError::InvalidParameter(
                "target_size must be at least 2".to_string(),
            ));
        }
        if self.k == 0 {
            return Err(RecogError::InvalidParameter(
                "k must be positive".to_string(),
            ));
        }
        if matches!(self.min_contour_area, Some(a) if !(a >= 0.0)) {
            return Err(RecogError::InvalidParameter(
                "min_contour_area must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Detailed outcome of one recognition call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitReading {
    /// The parsed number
    pub value: u64,
    /// Classified digits, left to right
    pub digits: String,
    /// Every glyph rect, left to right, with its label (`None` = no match)
    pub glyphs: Vec<(Box, Option<u8>)>,
}

/// Glyph rects of a region, sorted left to right, and the mask to crop them from
///
/// The mask is the region itself unless dropped contours are erased.
pub fn find_glyph_rects(region: &Pix, options: &RecognizeOptions) -> RecogResult<(Vec<Box>, Pix)> {
    let (contours, labels) = find_contours_labeled(region)?;
    debug!(contours = contours.len(), "contours found");

    let mut dropped = vec![false; contours.len() + 1];
    let mut rects = Vec::with_capacity(contours.len());
    for contour in &contours {
        match options.min_contour_area {
            Some(min_area) if contour.area() < min_area => {
                trace!(bounds = ?contour.bounds, area = contour.area(), "contour below minimum area");
                dropped[contour.label as usize] = true;
            }
            _ => rects.push(contour.bounds),
        }
    }

    let working = if options.erase_dropped_contours && dropped.contains(&true) {
        labels.render_mask(|label| !dropped[label as usize])?
    } else {
        region.clone()
    };

    let rects = connect_broken(&rects, region.width(), region.height(), &options.connect);
    let mut rects: Boxa = split_connected(&working, &rects, &options.split)
        .into_iter()
        .collect();
    if let Some(filter) = &options.rect_filter {
        rects.retain(|r| filter.keeps(r, region));
    }
    rects.sort_by_x();
    Ok((rects.into_vec(), working))
}

/// Read the digits in a region, with per-glyph diagnostics
///
/// # Errors
///
/// - [`RecogError::NoGlyphsFound`] if no rect survives repair and filtering
/// - [`RecogError::UnparsableDigitString`] if no glyph matched or the number
///   does not fit a `u64`
pub fn read_digits(
    region: &Pix,
    model: &dyn DigitClassifier,
    options: &RecognizeOptions,
) -> RecogResult<DigitReading> {
    options.validate()?;
    let (rects, working) = find_glyph_rects(region, options)?;
    if rects.is_empty() {
        return Err(RecogError::NoGlyphsFound);
    }

    let mut glyphs = Vec::with_capacity(rects.len());
    let mut digits = String::with_capacity(rects.len());
    for rect in rects {
        let glyph = Glyph::from_region(&working, &rect, options.target_size)?;
        let features = extract_features(glyph.pix())?;
        let label = model.find_nearest(&features, options.k);
        match label {
            Some(d) => digits.push(char::from(b'0' + d)),
            None => trace!(rect = ?glyph.rect(), "glyph has no confident match, skipped"),
        }
        glyphs.push((*glyph.rect(), label));
    }
    debug!(%digits, glyphs = glyphs.len(), "digit string assembled");

    let value = digits
        .parse::<u64>()
        .map_err(|_| RecogError::UnparsableDigitString(digits.clone()))?;
    Ok(DigitReading {
        value,
        digits,
        glyphs,
    })
}

/// Read the number printed in a binary region
///
/// # Example
///
/// ```no_run
/// use arcocr_recog::digits::{KNearest, RecognizeOptions, recognize_digits};
/// use arcocr_core::Pix;
///
/// let model = KNearest::default();
/// let region = Pix::new(60, 20).unwrap();
/// let value = recognize_digits(&region, &model, &RecognizeOptions::default());
/// ```
pub fn recognize_digits(
    region: &Pix,
    model: &dyn DigitClassifier,
    options: &RecognizeOptions,
) -> RecogResult<u64> {
    read_digits(region, model, options).map(|r| r.value)
}

/// Recognize many regions in parallel
///
/// Results are in input order; failures are returned per region.
pub fn recognize_batch(
    regions: &[Pix],
    model: &dyn DigitClassifier,
    options: &RecognizeOptions,
) -> Vec<RecogResult<u64>> {
    regions
        .par_iter()
        .map(|region| recognize_digits(region, model, options))
        .collect()
}
