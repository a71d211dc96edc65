//! Component measurement regression test

use rasterlab_core::Rect;
use rasterlab_region::{Connectivity, component_bounds, component_sizes, component_stats, label_components};
use rasterlab_test::mask_from_ascii;

#[test]
fn sizes_bounds_and_stats_agree() {
    let mask = mask_from_ascii(
        "##....
         ##....
         ....##
         .#..##
         .#....",
    );
    let (labels, count) = label_components(&mask, Connectivity::Four).unwrap();
    assert_eq!(count, 3);

    let sizes = component_sizes(&labels);
    assert_eq!(sizes, vec![4, 4, 2]);

    let bounds = component_bounds(&labels);
    assert_eq!(bounds[0], Rect { x: 0, y: 0, w: 2, h: 2 });
    assert_eq!(bounds[1], Rect { x: 4, y: 2, w: 2, h: 2 });
    assert_eq!(bounds[2], Rect { x: 1, y: 3, w: 1, h: 2 });

    let stats = component_stats(&labels);
    assert_eq!(stats.len(), 3);
    for (i, s) in stats.iter().enumerate() {
        assert_eq!(s.label, i as u32 + 1);
        assert_eq!(s.pixel_count, sizes[i]);
        assert_eq!(s.bounds, bounds[i]);
        assert!(s.bounds.contains(s.centroid_x.round() as u32, s.centroid_y.round() as u32));
    }

    // the 2x2 block at the origin has its centroid between the pixels
    assert!((stats[0].centroid_x - 0.5).abs() < 1e-9);
    assert!((stats[0].centroid_y - 0.5).abs() < 1e-9);
}

#[test]
fn total_size_equals_foreground_count() {
    let mask = mask_from_ascii(
        "#.#.#.#
         .#.#.#.
         #######",
    );
    let (labels, _) = label_components(&mask, Connectivity::Eight).unwrap();
    let total: u32 = component_sizes(&labels).iter().sum();
    assert_eq!(total as usize, mask.count_foreground());
}
