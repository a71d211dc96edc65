//! rasterlab-filter - Smoothing and histogram enhancement
//!
//! This crate provides intensity-domain filtering:
//!
//! - Mean (box) smoothing with a zero border policy
//! - Histogram equalization, full-range or in a quantized level domain
//! - Linear contrast stretching

pub mod enhance;
mod error;
pub mod mean;

pub use enhance::{contrast_stretch, equalize, equalize_levels};
pub use error::{FilterError, FilterResult};
pub use mean::mean_filter;
