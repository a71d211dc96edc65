//! Rasterlab - Raster image processing for Rust
//!
//! # Overview
//!
//! Rasterlab provides a small set of classic raster operations:
//!
//! - Connected-component labeling of binary masks (4- or 8-way)
//! - Component measurements (sizes, bounds, centroids)
//! - Geometric resampling (nearest-neighbor, bilinear)
//! - Histogram equalization and contrast stretching
//! - Mean filtering
//! - Thresholding and label-map rendering
//!
//! # Example
//!
//! ```
//! use rasterlab::{GrayImage, Connectivity};
//! use rasterlab::color::threshold_to_mask;
//! use rasterlab::region::label_components;
//!
//! // two bright blobs on a dark background
//! let img = GrayImage::from_fn(8, 8, |x, y| {
//!     if (x < 2 && y < 2) || (x > 5 && y > 5) { 200 } else { 20 }
//! }).unwrap();
//!
//! let mask = threshold_to_mask(&img, 127).unwrap();
//! let (labels, count) = label_components(&mask, Connectivity::Four).unwrap();
//! assert_eq!(count, 2);
//! assert_eq!(labels.get(0, 0), Some(1));
//! assert_eq!(labels.get(7, 7), Some(2));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_color as color;
pub use rasterlab_filter as filter;
pub use rasterlab_region as region;
pub use rasterlab_transform as transform;

// The labeling entry points are the main surface of the workspace
pub use rasterlab_region::{Connectivity, count_components, label_components};
