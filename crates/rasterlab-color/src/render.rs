//! Label map rendering
//!
//! Paints each labeled component in its own color for visualization.
//! The palette comes from a fixed-seed generator, so a given label map
//! renders identically on every run; background stays black. Colors are
//! drawn from the upper part of each channel range to keep every
//! component clearly visible against the background.

use crate::error::ColorResult;
use log::trace;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rasterlab_core::{LabelMap, RgbImage};

const PALETTE_SEED: u64 = 42;

/// One color per label, index 0 black, the rest drawn in label order.
fn build_palette(max_label: u32) -> Vec<(u8, u8, u8)> {
    let mut rng = StdRng::seed_from_u64(PALETTE_SEED);
    let mut palette = Vec::with_capacity(max_label as usize + 1);
    palette.push((0, 0, 0));
    for _ in 0..max_label {
        let r = rng.random_range(64..=255u8);
        let g = rng.random_range(64..=255u8);
        let b = rng.random_range(64..=255u8);
        palette.push((r, g, b));
    }
    palette
}

/// Render a label map as a color image.
///
/// Every component gets a stable color determined only by its label, so
/// repeated runs over the same map produce identical images.
pub fn render_labels(labels: &LabelMap) -> ColorResult<RgbImage> {
    let palette = build_palette(labels.max_label());
    trace!(
        "rendering {}x{} label map with {} colors",
        labels.width(),
        labels.height(),
        palette.len() - 1
    );
    let mut out = RgbImage::new(labels.width(), labels.height())?;
    for y in 0..labels.height() {
        for x in 0..labels.width() {
            let (r, g, b) = palette[labels.get_unchecked(x, y) as usize];
            out.set_rgb(x, y, r, g, b)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> LabelMap {
        let mut labels = LabelMap::new(4, 2).unwrap();
        labels.set(0, 0, 1).unwrap();
        labels.set(1, 0, 1).unwrap();
        labels.set(3, 1, 2).unwrap();
        labels
    }

    #[test]
    fn test_background_is_black() {
        let img = render_labels(&sample_map()).unwrap();
        assert_eq!(img.get_rgb(2, 0), Some((0, 0, 0)));
        assert_eq!(img.get_rgb(0, 1), Some((0, 0, 0)));
    }

    #[test]
    fn test_same_label_same_color_distinct_labels_distinct_colors() {
        let img = render_labels(&sample_map()).unwrap();
        let c1 = img.get_rgb(0, 0).unwrap();
        assert_eq!(img.get_rgb(1, 0), Some(c1));
        let c2 = img.get_rgb(3, 1).unwrap();
        assert_ne!(c1, c2);
        assert_ne!(c1, (0, 0, 0));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let labels = sample_map();
        let a = render_labels(&labels).unwrap();
        let b = render_labels(&labels).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_palette_channels_stay_bright() {
        let palette = build_palette(50);
        for &(r, g, b) in &palette[1..] {
            assert!(r >= 64 && g >= 64 && b >= 64);
        }
    }
}
