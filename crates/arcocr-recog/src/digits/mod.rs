//! Digit recognition module
//!
//! Turns a binary region holding a printed number into its integer value.
//!
//! # Overview
//!
//! The recognizer works by:
//! 1. Extracting the external contour of every ink blob
//! 2. Repairing the contour rects: merging stacked fragments of one glyph,
//!    then splitting rects that hold two touching glyphs
//! 3. Normalizing each rect into a square glyph
//! 4. Describing each glyph by a HOG-style gradient histogram
//! 5. Labeling each descriptor with a k-nearest-neighbor model
//! 6. Reading the labels left to right as a decimal number
//!
//! # Example
//!
//! ```no_run
//! use arcocr_recog::digits::{KNearest, RecognizeOptions, RectFilter, recognize_digits};
//! use arcocr_core::Pix;
//!
//! # fn samples() -> Vec<(Pix, u8)> { Vec::new() }
//! let samples = samples();
//! let model = KNearest::from_glyphs(samples.iter().map(|(p, l)| (p, *l)), 20).unwrap();
//!
//! let options = RecognizeOptions::default()
//!     .with_min_contour_area(5.0 * 1.25)
//!     .with_erase_dropped_contours(true)
//!     .with_rect_filter(RectFilter::min_size(6, 7));
//!
//! let region = Pix::new(120, 30).unwrap();
//! let value = recognize_digits(&region, &model, &options);
//! ```

mod coverage;
mod filter;
mod hog;
mod knn;
mod normalize;
mod recognize;
mod repair;

pub use coverage::*;
pub use filter::*;
pub use hog::*;
pub use knn::*;
pub use normalize::*;
pub use recognize::*;
pub use repair::*;
