//! Error types for rasterlab-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core container error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Scale factor is not a positive finite number
    #[error("invalid scale factor: {0}")]
    InvalidScale(f32),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
