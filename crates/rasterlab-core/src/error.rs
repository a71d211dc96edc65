//! Error types for rasterlab-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Rasterlab error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinates outside the grid
    #[error("coordinates ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw buffer length does not match the grid dimensions
    #[error("data size mismatch: expected {expected} values, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for rasterlab operations
pub type Result<T> = std::result::Result<T, Error>;
