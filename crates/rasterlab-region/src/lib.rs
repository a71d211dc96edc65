//! rasterlab-region - Connected-component labeling
//!
//! This crate assigns a consistent integer label to every maximal region
//! of 4- or 8-connected foreground pixels in a binary mask, using a
//! single forward raster scan with deferred equivalence resolution and a
//! compaction pass:
//!
//! - **Union-find forest** ([`UnionFind`]) - equivalence classes of
//!   provisional labels
//! - **Labeling** ([`label_components`], [`count_components`]) - the
//!   two-pass operation itself
//! - **Measurements** ([`component_sizes`], [`component_bounds`],
//!   [`component_stats`]) - per-component summaries of a label map
//!
//! # Examples
//!
//! ```
//! use rasterlab_core::BitMask;
//! use rasterlab_region::{Connectivity, label_components};
//!
//! let mut mask = BitMask::new(100, 100).unwrap();
//! mask.set(10, 10, true).unwrap();
//! mask.set(11, 10, true).unwrap();
//! mask.set(50, 50, true).unwrap();
//!
//! let (labels, count) = label_components(&mask, Connectivity::Four).unwrap();
//! assert_eq!(count, 2);
//! assert_eq!(labels.get(10, 10), labels.get(11, 10));
//! assert_ne!(labels.get(10, 10), labels.get(50, 50));
//! ```

pub mod components;
pub mod conncomp;
pub mod error;
pub mod unionfind;

// Re-export core types
pub use rasterlab_core;

pub use components::{ComponentStats, component_bounds, component_sizes, component_stats};
pub use conncomp::{Connectivity, count_components, label_components};
pub use error::{RegionError, RegionResult};
pub use unionfind::UnionFind;
