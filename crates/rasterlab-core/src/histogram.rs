//! Gray-level histogram
//!
//! The histogram is the shared substrate of the enhancement operations
//! (equalization, contrast measurement). Counts are `u32`, which holds
//! the worst case of a single-level 4-gigapixel image.

use crate::gray::GrayImage;

/// Number of gray levels in an 8-bit image.
pub const GRAY_LEVELS: usize = 256;

impl GrayImage {
    /// Count the occurrences of each gray level.
    pub fn histogram(&self) -> [u32; GRAY_LEVELS] {
        let mut hist = [0u32; GRAY_LEVELS];
        for &v in self.data() {
            hist[v as usize] += 1;
        }
        hist
    }

    /// Smallest gray level present in the image.
    pub fn min_level(&self) -> u8 {
        self.data().iter().copied().min().unwrap_or(0)
    }

    /// Largest gray level present in the image.
    pub fn max_level(&self) -> u8 {
        self.data().iter().copied().max().unwrap_or(0)
    }
}
