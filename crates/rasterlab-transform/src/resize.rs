//! Image resampling
//!
//! Two interpolation kernels are provided, selected by [`ResizeMethod`]:
//!
//! - **Nearest**: each destination pixel copies the source pixel whose
//!   center is closest. Fast and blocky; preserves the original value
//!   set exactly, which matters when the image is a quantized map.
//! - **Bilinear**: each destination pixel blends the four surrounding
//!   source pixels. The coordinate mapping pins the image edges to the
//!   destination edges, so the first and last rows and columns of the
//!   source survive resampling exactly.

use crate::error::{TransformError, TransformResult};
use log::trace;
use rasterlab_core::GrayImage;

/// Resampling kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMethod {
    /// Nearest-neighbor sampling
    Nearest,
    /// Bilinear interpolation
    Bilinear,
}

/// Resize an image to an explicit target size.
///
/// # Errors
///
/// Returns an error if either target dimension is 0.
pub fn resize_to(
    img: &GrayImage,
    new_width: u32,
    new_height: u32,
    method: ResizeMethod,
) -> TransformResult<GrayImage> {
    trace!(
        "resizing {}x{} -> {}x{} ({:?})",
        img.width(),
        img.height(),
        new_width,
        new_height,
        method
    );
    let mut out = GrayImage::new(new_width, new_height)?;
    match method {
        ResizeMethod::Nearest => resample_nearest(img, &mut out),
        ResizeMethod::Bilinear => resample_bilinear(img, &mut out),
    }
    Ok(out)
}

/// Resize an image by scale factors.
///
/// Target dimensions are rounded and never fall below one pixel, so
/// arbitrarily small positive factors still produce an image.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScale`] unless both factors are
/// positive finite numbers.
pub fn resize(
    img: &GrayImage,
    scale_x: f32,
    scale_y: f32,
    method: ResizeMethod,
) -> TransformResult<GrayImage> {
    for factor in [scale_x, scale_y] {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TransformError::InvalidScale(factor));
        }
    }
    let new_width = ((img.width() as f32 * scale_x).round() as u32).max(1);
    let new_height = ((img.height() as f32 * scale_y).round() as u32).max(1);
    resize_to(img, new_width, new_height, method)
}

fn resample_nearest(src: &GrayImage, dst: &mut GrayImage) {
    let (w, h) = (src.width(), src.height());
    let row_scale = h as f32 / dst.height() as f32;
    let col_scale = w as f32 / dst.width() as f32;

    for i in 0..dst.height() {
        let src_y = ((i as f32 * row_scale).round() as u32).min(h - 1);
        for j in 0..dst.width() {
            let src_x = ((j as f32 * col_scale).round() as u32).min(w - 1);
            dst.set_unchecked(j, i, src.get_unchecked(src_x, src_y));
        }
    }
}

fn resample_bilinear(src: &GrayImage, dst: &mut GrayImage) {
    let (w, h) = (src.width(), src.height());
    // pin edges to edges; a one-pixel destination axis samples the origin
    let row_scale = if dst.height() > 1 {
        (h - 1) as f32 / (dst.height() - 1) as f32
    } else {
        0.0
    };
    let col_scale = if dst.width() > 1 {
        (w - 1) as f32 / (dst.width() - 1) as f32
    } else {
        0.0
    };

    for i in 0..dst.height() {
        let src_y = i as f32 * row_scale;
        let y0 = src_y.floor() as u32;
        let y1 = (y0 + 1).min(h - 1);
        let wy = src_y - y0 as f32;
        for j in 0..dst.width() {
            let src_x = j as f32 * col_scale;
            let x0 = src_x.floor() as u32;
            let x1 = (x0 + 1).min(w - 1);
            let wx = src_x - x0 as f32;

            let top = (1.0 - wx) * src.get_unchecked(x0, y0) as f32
                + wx * src.get_unchecked(x1, y0) as f32;
            let bottom = (1.0 - wx) * src.get_unchecked(x0, y1) as f32
                + wx * src.get_unchecked(x1, y1) as f32;
            let value = (1.0 - wy) * top + wy * bottom;
            dst.set_unchecked(j, i, value.clamp(0.0, 255.0) as u8);
        }
    }
}
