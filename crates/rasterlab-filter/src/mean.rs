//! Mean (box) smoothing filter
//!
//! Averages each pixel with its k x k neighborhood. The border policy
//! is zero padding: window positions outside the image contribute 0 to
//! the sum and the divisor stays k*k, so border pixels darken toward
//! the frame. Implemented over an integral image, which makes the cost
//! per pixel independent of the window size.

use crate::error::{FilterError, FilterResult};
use log::trace;
use rasterlab_core::GrayImage;

/// Build an integral image (summed area table).
///
/// Entry (x, y) holds the sum of all source values in the rectangle
/// from (0, 0) to (x, y) inclusive. The recursion is
/// `a(x,y) = v(x,y) + a(x-1,y) + a(x,y-1) - a(x-1,y-1)`.
fn integral_image(img: &GrayImage) -> Vec<u64> {
    let w = img.width() as usize;
    let h = img.height() as usize;
    let mut accum = vec![0u64; w * h];

    accum[0] = u64::from(img.get_unchecked(0, 0));
    for x in 1..w {
        accum[x] = u64::from(img.get_unchecked(x as u32, 0)) + accum[x - 1];
    }
    for y in 1..h {
        accum[y * w] = u64::from(img.get_unchecked(0, y as u32)) + accum[(y - 1) * w];
    }
    for y in 1..h {
        for x in 1..w {
            accum[y * w + x] = u64::from(img.get_unchecked(x as u32, y as u32))
                + accum[y * w + x - 1]
                + accum[(y - 1) * w + x]
                - accum[(y - 1) * w + x - 1];
        }
    }
    accum
}

/// Sum of the values in the inclusive rectangle (x0, y0) to (x1, y1).
fn rect_sum(accum: &[u64], width: usize, x0: u32, y0: u32, x1: u32, y1: u32) -> u64 {
    let at = |x: u32, y: u32| accum[(y as usize) * width + (x as usize)];
    let mut sum = at(x1, y1);
    if x0 > 0 {
        sum -= at(x0 - 1, y1);
    }
    if y0 > 0 {
        sum -= at(x1, y0 - 1);
    }
    if x0 > 0 && y0 > 0 {
        sum += at(x0 - 1, y0 - 1);
    }
    sum
}

/// Smooth an image with a k x k mean filter.
///
/// The output value is the truncated integer mean of the window under
/// the zero border policy described in the module docs. `k == 1` is the
/// identity.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernelSize`] if `k` is even or 0.
pub fn mean_filter(img: &GrayImage, k: u32) -> FilterResult<GrayImage> {
    if k == 0 || k % 2 == 0 {
        return Err(FilterError::InvalidKernelSize(k));
    }
    if k == 1 {
        return Ok(img.clone());
    }
    trace!("mean filter {}x{} window on {}x{} image", k, k, img.width(), img.height());

    let (w, h) = (img.width(), img.height());
    let half = k / 2;
    let window = u64::from(k) * u64::from(k);
    let accum = integral_image(img);
    let mut out = GrayImage::new(w, h)?;

    for y in 0..h {
        let y0 = y.saturating_sub(half);
        let y1 = (y + half).min(h - 1);
        for x in 0..w {
            let x0 = x.saturating_sub(half);
            let x1 = (x + half).min(w - 1);
            let sum = rect_sum(&accum, w as usize, x0, y0, x1, y1);
            out.set_unchecked(x, y, (sum / window) as u8);
        }
    }
    Ok(out)
}
