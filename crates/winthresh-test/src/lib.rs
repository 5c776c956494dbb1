//! winthresh-test - Regression test harness
//!
//! Collects value and image comparisons for a named regression run and
//! reports every failure at the end instead of stopping at the first one.
//! Two modes are supported:
//!
//! - **Compare**: check results only (default)
//! - **Display**: also write intermediate images to `tests/regout` for
//!   visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use winthresh_test::RegParams;
//!
//! let mut rp = RegParams::new("surface");
//! rp.compare_values(128.0, threshold as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "gradient.pgm")
pub fn load_test_image(name: &str) -> TestResult<winthresh_core::Pix> {
    let path = test_data_path(name);
    winthresh_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // this crate lives at crates/winthresh-test
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
