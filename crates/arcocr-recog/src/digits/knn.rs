//! Nearest-neighbor digit classification
//!
//! The engine only needs one operation from a trained model:
//! [`DigitClassifier::find_nearest`]. [`KNearest`] is a brute-force
//! reference backend over labeled feature vectors.

use crate::digits::hog::{FEATURE_LEN, FeatureVector, extract_features};
use crate::digits::normalize::Glyph;
use crate::error::{RecogError, RecogResult};
use arcocr_core::Pix;

/// A pre-trained digit model
///
/// Implementations are immutable after construction and may be queried
/// from many threads at once.
pub trait DigitClassifier: Send + Sync {
    /// Label (0-9) voted by the `k` nearest samples, or `None` for no match
    fn find_nearest(&self, features: &FeatureVector, k: usize) -> Option<u8>;
}

/// Brute-force Euclidean k-nearest-neighbor classifier
///
/// The `k` closest samples vote. A tie in vote count goes to the label
/// whose voters are closer in total, then to the smaller label.
#[derive(Debug, Clone, Default)]
pub struct KNearest {
    samples: Vec<(FeatureVector, u8)>,
}

impl KNearest {
    /// Build a model from labeled feature vectors
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] for labels above 9 or
    /// vectors that are not [`FEATURE_LEN`] long.
    pub fn new(samples: Vec<(FeatureVector, u8)>) -> RecogResult<Self> {
        for (features, label) in &samples {
            if *label > 9 {
                return Err(RecogError::InvalidParameter(format!(
                    "sample label {label} is not a digit"
                )));
            }
            if features.len() != FEATURE_LEN {
                return Err(RecogError::InvalidParameter(format!(
                    "sample has {} features, expected {FEATURE_LEN}",
                    features.len()
                )));
            }
        }
        Ok(Self { samples })
    }

    /// Build a model from labeled glyph crops, normalized to `target`
    pub fn from_glyphs<'a>(
        glyphs: impl IntoIterator<Item = (&'a Pix, u8)>,
        target: u32,
    ) -> RecogResult<Self> {
        let samples = glyphs
            .into_iter()
            .map(|(crop, label)| {
                let glyph = Glyph::from_crop(crop, target)?;
                Ok((extract_features(glyph.pix())?, label))
            })
            .collect::<RecogResult<Vec<_>>>()?;
        Self::new(samples)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the model has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl DigitClassifier for KNearest {
    fn find_nearest(&self, features: &FeatureVector, k: usize) -> Option<u8> {
        if k == 0 || self.samples.is_empty() {
            return None;
        }

        let mut ranked: Vec<(f32, u8)> = self
            .samples
            .iter()
            .map(|(s, label)| (s.distance_squared(features), *label))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        ranked.truncate(k);

        let mut votes = [(0usize, 0f32); 10];
        for (dist, label) in &ranked {
            let v = &mut votes[*label as usize];
            v.0 += 1;
            v.1 += dist.sqrt();
        }

        (0u8..10)
            .filter(|&l| votes[l as usize].0 > 0)
            .min_by(|&a, &b| {
                let (ca, da) = votes[a as usize];
                let (cb, db) = votes[b as usize];
                cb.cmp(&ca).then(da.total_cmp(&db)).then(a.cmp(&b))
            })
    }
}
