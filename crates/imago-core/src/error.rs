//! Error types for imago-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! # See also
//!
//! image-js reports contract violations through `checkProcessable()`
//! exceptions. This module replaces those with Rust's `Result<T, Error>`
//! pattern.

use thiserror::Error;

use crate::raster::{BitDepth, RasterKind};

/// imago core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid bit depth
    #[error("invalid bit depth: {0}")]
    InvalidDepth(u32),

    /// Raster kind and bit depth are incompatible
    #[error("incompatible kind and depth: {kind:?} at {depth:?}")]
    KindDepthMismatch { kind: RasterKind, depth: BitDepth },

    /// Sample buffer length does not match the declared geometry
    #[error("buffer size mismatch: expected {expected} samples, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Sample exceeds the range of the declared bit depth
    #[error("sample out of range: {value} > {max}")]
    SampleOutOfRange { value: u16, max: u16 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Raster dimension mismatch between two operands
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for imago core operations
pub type Result<T> = std::result::Result<T, Error>;
