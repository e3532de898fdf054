//! imago - Raster morphology and seeded region growing
//!
//! A Rust rendition of the pixel-grid core of the
//! [image-js](https://github.com/image-js/image-js) processing library.
//!
//! # Overview
//!
//! imago provides two pixel-grid algorithms over a dense raster buffer:
//!
//! - Structuring-element erosion for binary and grayscale rasters, with
//!   arbitrary footprint shapes and literal sequential iteration
//! - Priority-ordered, seed-driven watershed labeling producing an
//!   immutable region map
//!
//! # Example
//!
//! ```
//! use imago::{Raster, RasterKind, BitDepth};
//! use imago::morph::erode_default;
//!
//! let raster = Raster::from_samples(
//!     5,
//!     1,
//!     RasterKind::Grey,
//!     BitDepth::Bit8,
//!     vec![255, 255, 0, 255, 255],
//! )
//! .unwrap();
//!
//! // The background sample spreads to every neighborhood containing it
//! let out = erode_default(&raster).unwrap();
//! assert_eq!(out.samples(), &[255, 0, 0, 0, 255]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use imago_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use imago_morph as morph;
pub use imago_region as region;
