//! Histogram-based enhancement
//!
//! Global tone adjustments driven by the gray-level histogram:
//! equalization spreads the cumulative distribution evenly over the
//! output range, optionally in a quantized domain with fewer levels,
//! and contrast stretching maps a measured or given input interval
//! linearly onto an output interval.

use crate::error::{FilterError, FilterResult};
use log::trace;
use rasterlab_core::{GRAY_LEVELS, GrayImage};

/// Build an equalization lookup table from gray-level counts.
///
/// `lut[v]` is the cumulative share of pixels at or below level `v`,
/// scaled to the top of the level range.
fn equalization_lut(hist: &[u32], levels: u32) -> Vec<u8> {
    let total: u64 = hist.iter().map(|&c| u64::from(c)).sum();
    let top = (levels - 1) as f64;
    let mut lut = Vec::with_capacity(hist.len());
    let mut cumulative = 0u64;
    for &count in hist {
        cumulative += u64::from(count);
        let cdf = cumulative as f64 / total as f64;
        lut.push((top * cdf).round().clamp(0.0, top) as u8);
    }
    lut
}

/// Equalize the histogram of an image over the full 256-level range.
pub fn equalize(img: &GrayImage) -> GrayImage {
    let lut = equalization_lut(&img.histogram(), GRAY_LEVELS as u32);
    trace!("equalizing {}x{} image", img.width(), img.height());
    let data = img.data().iter().map(|&v| lut[v as usize]).collect();
    GrayImage::from_raw(img.width(), img.height(), data)
        .expect("lut application preserves dimensions")
}

/// Equalize in a quantized domain of `levels` gray levels.
///
/// Input values are binned with `bin = value * levels / 256`, the
/// equalization runs on the binned histogram, and the result is
/// expanded back to 0..=255 with `round(bin * 255 / (levels - 1))`.
/// With `levels == 256` this is plain [`equalize`].
///
/// # Errors
///
/// Returns [`FilterError::InvalidLevelCount`] unless `levels` is in
/// 2..=256.
pub fn equalize_levels(img: &GrayImage, levels: u32) -> FilterResult<GrayImage> {
    if !(2..=256).contains(&levels) {
        return Err(FilterError::InvalidLevelCount(levels));
    }
    if levels as usize == GRAY_LEVELS {
        return Ok(equalize(img));
    }

    let bins: Vec<u8> = img
        .data()
        .iter()
        .map(|&v| ((u32::from(v) * levels) / 256).min(levels - 1) as u8)
        .collect();

    let mut hist = vec![0u32; levels as usize];
    for &b in &bins {
        hist[b as usize] += 1;
    }
    let lut = equalization_lut(&hist, levels);

    let expand = 255.0 / (levels - 1) as f64;
    let data = bins
        .iter()
        .map(|&b| (f64::from(lut[b as usize]) * expand).round() as u8)
        .collect();
    Ok(GrayImage::from_raw(img.width(), img.height(), data)
        .expect("lut application preserves dimensions"))
}

/// Linearly stretch gray levels from an input interval to an output interval.
///
/// When `input` is `None` the interval is measured from the image as
/// its minimum and maximum levels. Values are mapped with
/// `g = (f - c) * (b - a) / (d - c) + a`, clamped to 0..=255 and
/// truncated. A degenerate input interval (`c == d`) produces a
/// constant image at `out_low`.
pub fn contrast_stretch(
    img: &GrayImage,
    out_low: u8,
    out_high: u8,
    input: Option<(u8, u8)>,
) -> GrayImage {
    let (c, d) = input.unwrap_or_else(|| (img.min_level(), img.max_level()));
    if c == d {
        let mut out = img.clone();
        out.fill(out_low);
        return out;
    }

    let a = f32::from(out_low);
    let slope = (f32::from(out_high) - a) / (f32::from(d) - f32::from(c));
    let data = img
        .data()
        .iter()
        .map(|&v| ((f32::from(v) - f32::from(c)) * slope + a).clamp(0.0, 255.0) as u8)
        .collect();
    GrayImage::from_raw(img.width(), img.height(), data)
        .expect("stretch preserves dimensions")
}
