//! Error types for imago-region

use imago_core::RasterKind;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imago_core::Error),

    /// Unsupported bit depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual} bpp")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Unsupported raster kind for this operation
    #[error("unsupported kind: expected {expected}, got {actual:?}")]
    UnsupportedKind {
        expected: &'static str,
        actual: RasterKind,
    },

    /// Mask dimensions do not match the raster
    #[error("mask size mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    MaskSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
