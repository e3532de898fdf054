//! imago Core - Basic data structures for raster processing
//!
//! This crate provides the fundamental data structures used throughout
//! the imago image processing library:
//!
//! - [`Raster`] / [`RasterMut`] - The main image container (immutable / mutable)
//! - [`RasterKind`] / [`BitDepth`] - Sample interpretation and range
//! - [`BitMask`] - Bit-per-pixel mask gating which pixels an operation may touch
//!
//! # See also
//!
//! image-js: the `Image` class and mask images (`src/image/Image.js`)

pub mod bitmask;
pub mod error;
pub mod raster;

pub use bitmask::{BitMask, get_data_bit, set_data_bit};
pub use error::{Error, Result};
pub use raster::{BitDepth, Raster, RasterKind, RasterMut};
