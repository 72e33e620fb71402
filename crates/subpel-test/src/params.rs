//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use std::fs;
use subpel_core::{Component, Raster};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and rasters (default)
    #[default]
    Compare,
    /// Compare, and also write rasters for visual inspection
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
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "bilinear")
    pub test_name: String,
    /// Current test index (incremented before each check)
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
    /// The mode is read from the `REGTEST_MODE` environment variable.
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

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the rasters have the same geometry and identical pixels.
    pub fn compare_rasters<T: Component>(
        &mut self,
        expected: &Raster<T>,
        actual: &Raster<T>,
    ) -> bool {
        self.compare_rasters_within(expected, actual, 0.0)
    }

    /// Compare two rasters allowing each component to differ by `delta`
    ///
    /// Reports the first mismatching pixel.
    pub fn compare_rasters_within<T: Component>(
        &mut self,
        expected: &Raster<T>,
        actual: &Raster<T>,
        delta: f64,
    ) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            self.fail(format!(
                "Failure in {}_reg: raster comparison for index {} - geometry mismatch: \
                 {}x{}x{} vs {}x{}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                expected.channels(),
                actual.width(),
                actual.height(),
                actual.channels()
            ));
            return false;
        }

        for ((x, y, e), (_, _, a)) in expected.pixels().zip(actual.pixels()) {
            let differs = e
                .iter()
                .zip(a)
                .any(|(&e, &a)| (e.to_f64() - a.to_f64()).abs() > delta);
            if differs {
                self.fail(format!(
                    "Failure in {}_reg: raster comparison for index {} - pixel mismatch at \
                     ({}, {}): expected {:?}, got {:?}",
                    self.test_name, self.index, x, y, e, a
                ));
                return false;
            }
        }

        true
    }

    /// Write an 8-bit raster as PNG in display mode
    ///
    /// The file goes to `tests/regout/<test_name>.<index>.png`. In compare
    /// mode only the index advances.
    pub fn write_raster(&mut self, raster: &Raster<u8>) -> TestResult<()> {
        self.index += 1;
        if !self.display() {
            return Ok(());
        }

        fs::create_dir_all(regout_dir())?;
        let path = format!("{}/{}.{:02}.png", regout_dir(), self.test_name, self.index);
        subpel_io::write_raster(raster, &path).map_err(|e| TestError::RasterWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
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

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
