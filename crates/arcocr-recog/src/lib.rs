//! arcocr-recog - Digit recognition for rhythm-game result screens
//!
//! This crate reads integers out of binary regions cropped from score
//! screenshots:
//!
//! - **Rect repair**: merge broken glyph fragments, split touching glyphs
//! - **Glyph normalization**: fit each glyph into a square canvas
//! - **Features**: HOG-style orientation histograms, Hellinger-normalized
//! - **Classification**: k-nearest-neighbor lookup in a labeled sample set
//! - **Batch and coverage helpers**: parallel recognition, mask selection
//!
//! # Quick Start
//!
//! ```no_run
//! use arcocr_recog::digits::{KNearest, RecognizeOptions, recognize_digits};
//! use arcocr_core::Pix;
//!
//! let model = KNearest::default();
//! let region = Pix::new(80, 20).unwrap();
//! match recognize_digits(&region, &model, &RecognizeOptions::default()) {
//!     Ok(value) => println!("read {value}"),
//!     Err(e) => println!("no reading: {e}"),
//! }
//! ```
//!
//! # Modules
//!
//! - [`digits`]: the recognition pipeline and its building blocks

pub mod digits;
mod error;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use digits::{
    DigitClassifier, DigitReading, KNearest, RecognizeOptions, RectFilter, read_digits,
    recognize_batch, recognize_digits, select_by_coverage,
};

// Re-export core for convenience
pub use arcocr_core;
