//! Regression test parameters and operations

use arcocr_core::{Box, Pix};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Record values; mismatches are reported but do not fail the test
    Generate,
    /// Compare with expected values (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable or string
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "contour")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        crate::init_logging();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        match self.mode {
            RegTestMode::Compare => {
                self.failures.push(msg);
                self.success = false;
            }
            RegTestMode::Generate | RegTestMode::Display => {}
        }
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two binary images for exact equality
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..pix1.height() {
            for x in 0..pix1.width() {
                if pix1.get_pixel_unchecked(x, y) != pix2.get_pixel_unchecked(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: pix comparison for index {} - pixel mismatch at ({}, {})\n\
                         expected:\n{}\nactual:\n{}",
                        self.test_name,
                        self.index,
                        x,
                        y,
                        crate::pix_to_ascii(pix1).join("\n"),
                        crate::pix_to_ascii(pix2).join("\n")
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two rectangle lists, element by element and in order
    pub fn compare_boxes(&mut self, expected: &[Box], actual: &[Box]) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: box comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two binary data arrays
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 {:?} vs {:?}",
                self.test_name,
                self.index,
                String::from_utf8_lossy(data1),
                String::from_utf8_lossy(data2)
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare_mode(name: &str) -> RegParams {
        let mut rp = RegParams::new(name);
        rp.mode = RegTestMode::Compare;
        rp
    }

    #[test]
    fn test_mode_from_env() {
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = compare_mode("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.success);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = compare_mode("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.success);
        assert_eq!(rp.failures.len(), 1);
        assert_eq!(rp.index, 1);
    }

    #[test]
    fn test_generate_mode_does_not_fail() {
        let mut rp = RegParams::new("test");
        rp.mode = RegTestMode::Generate;
        assert!(!rp.compare_values(1.0, 2.0, 0.0));
        assert!(rp.success);
    }

    #[test]
    fn test_compare_boxes() {
        let mut rp = compare_mode("test");
        let a = [Box::new_unchecked(0, 0, 2, 3)];
        assert!(rp.compare_boxes(&a, &a));
        assert!(!rp.compare_boxes(&a, &[]));
        assert!(!rp.success);
    }

    #[test]
    fn test_compare_pix_size_mismatch() {
        let mut rp = compare_mode("test");
        let p1 = Pix::new(3, 3).unwrap();
        let p2 = Pix::new(3, 4).unwrap();
        assert!(rp.compare_pix(&p1, &p1.clone()));
        assert!(!rp.compare_pix(&p1, &p2));
    }

    #[test]
    fn test_compare_pix_reports_pixels() {
        let mut rp = compare_mode("test");
        let p1 = crate::pix_from_ascii(&["#.", ".#"]).unwrap();
        let p2 = crate::pix_from_ascii(&["#.", ".."]).unwrap();
        assert!(!rp.compare_pix(&p1, &p2));
        assert!(rp.failures[0].contains("(1, 1)"));
        assert!(rp.failures[0].ends_with("#.\n.."));
    }
}
