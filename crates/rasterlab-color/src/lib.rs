//! rasterlab-color - Thresholding and label rendering
//!
//! The color-domain ends of the labeling pipeline: turning grayscale
//! images into the binary masks the component labeler consumes, and
//! painting label maps for visualization.

mod error;
pub mod render;
pub mod threshold;

pub use error::{ColorError, ColorResult};
pub use render::render_labels;
pub use threshold::{threshold_to_binary, threshold_to_mask};
