//! Fixed-threshold binarization
//!
//! Classifies gray pixels into foreground and background with the rule
//! `foreground = (value >= threshold)`; a pixel sitting exactly on the
//! threshold is foreground. The mask form feeds the component labeler,
//! the 0/255 image form is for display.

use crate::error::ColorResult;
use rasterlab_core::{BitMask, GrayImage};

/// Threshold a grayscale image into a binary mask.
///
/// # Examples
///
/// ```
/// use rasterlab_core::GrayImage;
/// use rasterlab_color::threshold_to_mask;
///
/// let img = GrayImage::from_raw(3, 1, vec![10, 127, 200]).unwrap();
/// let mask = threshold_to_mask(&img, 127).unwrap();
/// assert_eq!(mask.get(0, 0), Some(false));
/// assert_eq!(mask.get(1, 0), Some(true)); // equality is foreground
/// assert_eq!(mask.get(2, 0), Some(true));
/// ```
pub fn threshold_to_mask(img: &GrayImage, threshold: u8) -> ColorResult<BitMask> {
    let mask = BitMask::from_fn(img.width(), img.height(), |x, y| {
        img.get_unchecked(x, y) >= threshold
    })?;
    Ok(mask)
}

/// Threshold a grayscale image into a 0/255 binary image.
pub fn threshold_to_binary(img: &GrayImage, threshold: u8) -> ColorResult<GrayImage> {
    let out = GrayImage::from_fn(img.width(), img.height(), |x, y| {
        if img.get_unchecked(x, y) >= threshold { 255 } else { 0 }
    })?;
    Ok(out)
}
