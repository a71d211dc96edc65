//! Per-component measurements over a label map
//!
//! These helpers summarize the output of
//! [`label_components`](crate::label_components): pixel counts, bounding
//! boxes, and centroids per component. They accept any label map; labels
//! that do not occur in the map (impossible for compacted output, which
//! is dense) are simply absent from the results, and the returned lists
//! are ordered by ascending label.

use rasterlab_core::{LabelMap, Rect};

/// Summary measurements for one labeled component
#[derive(Debug, Clone)]
pub struct ComponentStats {
    /// Component label
    pub label: u32,
    /// Bounding box
    pub bounds: Rect,
    /// Number of pixels
    pub pixel_count: u32,
    /// Centroid x coordinate
    pub centroid_x: f64,
    /// Centroid y coordinate
    pub centroid_y: f64,
}

#[derive(Clone)]
struct Accum {
    count: u32,
    sum_x: u64,
    sum_y: u64,
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

impl Accum {
    fn empty() -> Self {
        Accum {
            count: 0,
            sum_x: 0,
            sum_y: 0,
            min_x: u32::MAX,
            min_y: u32::MAX,
            max_x: 0,
            max_y: 0,
        }
    }

    fn add(&mut self, x: u32, y: u32) {
        self.count += 1;
        self.sum_x += u64::from(x);
        self.sum_y += u64::from(y);
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn bounds(&self) -> Rect {
        Rect {
            x: self.min_x,
            y: self.min_y,
            w: self.max_x - self.min_x + 1,
            h: self.max_y - self.min_y + 1,
        }
    }
}

fn accumulate(labels: &LabelMap) -> Vec<Accum> {
    let mut acc = vec![Accum::empty(); labels.max_label() as usize + 1];
    for y in 0..labels.height() {
        for x in 0..labels.width() {
            let label = labels.get_unchecked(x, y);
            if label > 0 {
                acc[label as usize].add(x, y);
            }
        }
    }
    acc
}

/// Pixel count of every component present, ordered by ascending label.
///
/// For a compacted label map, index `i` holds the size of label `i + 1`.
pub fn component_sizes(labels: &LabelMap) -> Vec<u32> {
    accumulate(labels)
        .iter()
        .filter(|a| a.count > 0)
        .map(|a| a.count)
        .collect()
}

/// Bounding box of every component present, ordered by ascending label.
///
/// For a compacted label map, index `i` holds the bounds of label `i + 1`.
pub fn component_bounds(labels: &LabelMap) -> Vec<Rect> {
    accumulate(labels)
        .iter()
        .filter(|a| a.count > 0)
        .map(Accum::bounds)
        .collect()
}

/// Full measurements of every component present, ordered by ascending label.
pub fn component_stats(labels: &LabelMap) -> Vec<ComponentStats> {
    accumulate(labels)
        .iter()
        .enumerate()
        .filter(|(_, a)| a.count > 0)
        .map(|(label, a)| ComponentStats {
            label: label as u32,
            bounds: a.bounds(),
            pixel_count: a.count,
            centroid_x: a.sum_x as f64 / f64::from(a.count),
            centroid_y: a.sum_y as f64 / f64::from(a.count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conncomp::{Connectivity, label_components};
    use rasterlab_core::BitMask;

    fn labeled(width: u32, height: u32, pixels: &[(u32, u32)], conn: Connectivity) -> LabelMap {
        let mut mask = BitMask::new(width, height).unwrap();
        for &(x, y) in pixels {
            mask.set(x, y, true).unwrap();
        }
        label_components(&mask, conn).unwrap().0
    }

    #[test]
    fn test_component_sizes() {
        let labels = labeled(10, 10, &[(0, 0), (1, 0), (5, 5)], Connectivity::Four);
        assert_eq!(component_sizes(&labels), vec![2, 1]);
    }

    #[test]
    fn test_component_bounds() {
        let labels = labeled(
            10,
            10,
            &[(0, 0), (1, 0), (2, 0), (1, 1)],
            Connectivity::Four,
        );
        let bounds = component_bounds(&labels);
        assert_eq!(bounds.len(), 1);
        assert_eq!(bounds[0], Rect { x: 0, y: 0, w: 3, h: 2 });
    }

    #[test]
    fn test_component_stats_l_shape() {
        let labels = labeled(10, 10, &[(0, 0), (2, 0), (1, 1)], Connectivity::Eight);
        let stats = component_stats(&labels);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].label, 1);
        assert_eq!(stats[0].pixel_count, 3);
        assert!((stats[0].centroid_x - 1.0).abs() < 1e-9);
        assert!((stats[0].centroid_y - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_map() {
        let labels = LabelMap::new(5, 5).unwrap();
        assert!(component_sizes(&labels).is_empty());
        assert!(component_bounds(&labels).is_empty());
        assert!(component_stats(&labels).is_empty());
    }
}
