//! subpel-test - Regression test framework for subpel
//!
//! Supports two modes, selected with the `REGTEST_MODE` environment
//! variable:
//!
//! - **Compare** (default): check values and rasters, record failures
//! - **Display**: additionally write produced rasters as PNG under
//!   `tests/regout` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use subpel_test::RegParams;
//!
//! let mut rp = RegParams::new("bilinear");
//! rp.compare_values(9.0, up.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // subpel-test is at crates/subpel-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
