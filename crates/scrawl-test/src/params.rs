//! Regression test parameters and operations

use crate::fixtures::ascii_rows;
use scrawl_core::Surface;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and record failures (default)
    #[default]
    Compare,
    /// Compare, and also dump renderings for visual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of the
/// current check, the mode and every recorded failure. Checks never panic;
/// call [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "crop")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
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

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
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
            self.fail(msg)
        } else {
            true
        }
    }

    /// Check a boolean condition
    pub fn compare_true(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if condition {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: condition for index {} does not hold: {}",
                self.test_name, self.index, what
            );
            self.fail(msg)
        }
    }

    /// Compare two surfaces for exact equality
    pub fn compare_surfaces(&mut self, s1: &Surface, s2: &Surface) -> bool {
        self.index += 1;

        if !s1.sizes_equal(s2) {
            let msg = format!(
                "Failure in {}_reg: surface comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                s1.width(),
                s1.height(),
                s2.width(),
                s2.height()
            );
            return self.fail(msg);
        }

        for y in 0..s1.height() {
            if let Some(x) = s1
                .row_data(y)
                .iter()
                .zip(s2.row_data(y))
                .position(|(a, b)| a != b)
            {
                let msg = format!(
                    "Failure in {}_reg: surface comparison for index {} - pixel mismatch at ({}, {})",
                    self.test_name, self.index, x, y
                );
                return self.fail(msg);
            }
        }

        true
    }

    /// Compare two row-major cell grids of the given column count
    pub fn compare_cells(&mut self, expected: &[u8], actual: &[u8], columns: usize) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: cell comparison for index {} - sizes: {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            return self.fail(msg);
        }

        if let Some(i) = expected.iter().zip(actual).position(|(a, b)| a != b) {
            let columns = columns.max(1);
            let msg = format!(
                "Failure in {}_reg: cell comparison for index {} - mismatch at row {}, column {}",
                self.test_name,
                self.index,
                i / columns,
                i % columns
            );
            return self.fail(msg);
        }

        true
    }

    /// Dump an ASCII rendering of a surface when in display mode
    pub fn show_surface(&self, label: &str, surface: &Surface) {
        if !self.display() {
            return;
        }
        eprintln!("-- {} ({}x{})", label, surface.width(), surface.height());
        for row in ascii_rows(surface) {
            eprintln!("   {}", row);
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
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

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
