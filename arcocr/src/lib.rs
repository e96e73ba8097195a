//! arcocr - Digit recognition for rhythm-game result screenshots
//!
//! Reads the numbers on a results screen (score, pure/far/lost counts,
//! max recall) from binary regions that an upstream color mask has
//! already cut out of the screenshot.
//!
//! # Overview
//!
//! - [`region`]: connected components and external contours
//! - [`transform`]: nearest-neighbor scaling and square fitting
//! - [`recog`]: rect repair, HOG features, k-NN classification
//!
//! # Example
//!
//! ```
//! use arcocr::Pix;
//! use arcocr::recog::{KNearest, RecogError, RecognizeOptions, recognize_digits};
//!
//! let region = Pix::new(64, 24).unwrap();
//! let result = recognize_digits(&region, &KNearest::default(), &RecognizeOptions::default());
//! assert!(matches!(result, Err(RecogError::NoGlyphsFound)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use arcocr_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use arcocr_recog as recog;
pub use arcocr_region as region;
pub use arcocr_transform as transform;
