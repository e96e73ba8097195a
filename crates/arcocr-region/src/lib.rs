//! arcocr-region - Region processing for arcocr
//!
//! This crate provides region processing functionality including:
//!
//! - **Connected component analysis** - Finding and labeling connected regions
//! - **Border tracing** - Moore-neighbor outer border following
//! - **Contours** - One external contour per outermost blob, with area and bounds
//!
//! # Examples
//!
//! ```
//! use arcocr_region::find_contours;
//! use arcocr_core::PixMut;
//!
//! let mut pm = PixMut::new(20, 10).unwrap();
//! pm.fill_rect(2, 2, 3, 6, 1);
//! pm.fill_rect(10, 2, 3, 6, 1);
//! let pix = pm.into();
//!
//! let contours = find_contours(&pix).unwrap();
//! assert_eq!(contours.len(), 2);
//! ```

pub mod ccbord;
pub mod conncomp;
pub mod contour;
pub mod error;
mod seedfill;

// Re-export core types
pub use arcocr_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use conncomp::{ConnectedComponent, ConnectivityType, LabelMap, label_connected_components};

pub use ccbord::{Border, BorderPoint, Direction, trace_outer_border};

pub use contour::{Contour, find_contours, find_contours_labeled};
