//! arcocr-test - Regression test framework for arcocr
//!
//! This crate provides a regression test framework supporting three modes:
//!
//! - **Generate**: Record values without failing
//! - **Compare**: Compare results with expected values (default)
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! plus synthetic fixtures: masks drawn from ASCII art and digits rendered
//! from a small bitmap font, so no image files are needed.
//!
//! # Usage
//!
//! ```ignore
//! use arcocr_test::RegParams;
//!
//! let mut rp = RegParams::new("contour");
//! rp.compare_values(3.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//! - `RUST_LOG`: Filter for the log output installed by [`init_logging`]

mod error;
pub mod glyphs;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use arcocr_core::{Pix, PixMut};
use std::sync::Once;

static LOGGING: Once = Once::new();

/// Install a `tracing` subscriber for test output, once per process.
///
/// Honors `RUST_LOG`; defaults to `warn` so passing tests stay quiet.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Build a binary mask from rows of ASCII art.
///
/// `#` (or `X`) is ink, anything else is background. Rows shorter than the
/// longest row are padded with background.
///
/// # Errors
///
/// Returns [`TestError::Fixture`] for empty input.
pub fn pix_from_ascii(rows: &[&str]) -> TestResult<Pix> {
    let height = rows.len() as u32;
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
    let fixture = |e: arcocr_core::Error| TestError::Fixture(e.to_string());
    let mut pm = PixMut::new(width, height).map_err(fixture)?;
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == '#' || c == 'X' {
                pm.set_pixel(x as u32, y as u32, 1).map_err(fixture)?;
            }
        }
    }
    Ok(pm.into())
}

/// Render a binary mask back to ASCII art (`#` ink, `.` background).
pub fn pix_to_ascii(pix: &Pix) -> Vec<String> {
    (0..pix.height())
        .map(|y| {
            (0..pix.width())
                .map(|x| {
                    if pix.get_pixel_unchecked(x, y) != 0 {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}
