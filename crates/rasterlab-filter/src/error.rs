//! Error types for rasterlab-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core container error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Kernel size must be odd and at least 1
    #[error("invalid kernel size: {0} (must be odd and >= 1)")]
    InvalidKernelSize(u32),

    /// Gray level count outside the supported range 2..=256
    #[error("invalid level count: {0} (must be in 2..=256)")]
    InvalidLevelCount(u32),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
