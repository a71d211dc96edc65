//! rasterlab-transform - Geometric resampling
//!
//! Resizing of grayscale images by nearest-neighbor sampling or
//! bilinear interpolation, either to an explicit target size or by
//! scale factors.

pub mod error;
pub mod resize;

// Re-export core types
pub use rasterlab_core;

pub use error::{TransformError, TransformResult};
pub use resize::{ResizeMethod, resize, resize_to};
