//! scrawl-test - Regression test framework for scrawl
//!
//! Provides the `RegParams` bookkeeping used by the `tests/*_reg.rs`
//! regression tests of every crate, plus fixture builders:
//!
//! - **Compare**: check values, surfaces and cell grids, record failures
//! - **Display**: additionally dump ASCII renderings to stderr
//!
//! # Usage
//!
//! ```ignore
//! use scrawl_test::RegParams;
//!
//! let mut rp = RegParams::new("crop");
//! rp.compare_values(41.0, crop.height() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{ascii_rows, stroke_surface, surface_from_ascii};
pub use params::{RegParams, RegTestMode};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}
