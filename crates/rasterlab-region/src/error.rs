//! Error types for rasterlab-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core container error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Connectivity degree outside the supported set {4, 8}
    #[error("invalid connectivity degree: {0} (expected 4 or 8)")]
    InvalidConnectivity(u32),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
