//! Error types for imago-morph

use imago_core::RasterKind;
use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imago_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Unsupported raster kind for this operation
    #[error("unsupported kind: expected {expected}, got {actual:?}")]
    UnsupportedKind {
        expected: &'static str,
        actual: RasterKind,
    },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
