//! imago-test - Regression test harness for imago
//!
//! Provides [`RegParams`], an indexed-comparison harness in the spirit of
//! classic image-library regression suites: each comparison gets an index,
//! failures accumulate instead of aborting the run, and `cleanup()` reports
//! the overall result.
//!
//! # Usage
//!
//! ```
//! use imago_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4452.0, 4452.0, 0.0);
//! rp.compare_buffers(&[1u16, 2, 3], &[1, 2, 3]);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;
