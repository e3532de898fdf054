//! imago-morph - Morphological operations for raster processing
//!
//! This crate provides:
//!
//! - Structuring elements defining operation neighborhoods, with arbitrary
//!   footprint shapes (holes permitted) and a documented floor-centered
//!   anchor convention
//! - Erosion for binary rasters (logical AND over the footprint) and
//!   grayscale rasters (minimum over the footprint)
//! - Sequential iterated erosion preserving literal pass-by-pass semantics
//!
//! Dilation, opening and closing are deliberately not part of this crate.
//!
//! # Examples
//!
//! ```
//! use imago_core::{Raster, RasterKind, BitDepth};
//! use imago_morph::erode_default;
//!
//! let raster = Raster::from_samples(
//!     5,
//!     1,
//!     RasterKind::Grey,
//!     BitDepth::Bit8,
//!     vec![9, 9, 0, 9, 9],
//! )
//! .unwrap();
//!
//! // The minimum of each in-bounds 3x3 neighborhood wins
//! let out = erode_default(&raster).unwrap();
//! assert_eq!(out.samples(), &[9, 0, 0, 0, 9]);
//! ```

pub mod element;
mod error;
pub mod erode;

pub use element::StructElement;
pub use erode::{erode, erode_default, erode_default_iter, erode_iter};
pub use error::{MorphError, MorphResult};
