//! Connected component labeling regression test
//!
//! Exercises the labeling contract end to end: background preservation,
//! dense numbering, discovery-order label assignment, deferred merges,
//! and the relationship between 4- and 8-way connectivity.

use rasterlab_core::BitMask;
use rasterlab_region::{Connectivity, count_components, label_components};
use rasterlab_test::{ascii_picture, labels_to_ascii, mask_from_ascii};

use std::collections::{HashMap, VecDeque};

#[test]
fn background_stays_zero_and_labels_are_dense() {
    let mask = mask_from_ascii(
        "##..#..##
         #...#...#
         ....#####
         .##......
         .##....#.",
    );

    for conn in [Connectivity::Four, Connectivity::Eight] {
        let (labels, count) = label_components(&mask, conn).unwrap();

        // label 0 exactly where the mask is background
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                let fg = mask.get(x, y).unwrap();
                let label = labels.get(x, y).unwrap();
                assert_eq!(label > 0, fg, "mismatch at ({x}, {y})");
            }
        }

        // foreground labels cover 1..=count with no gaps
        let mut seen = vec![false; count as usize + 1];
        for &label in labels.data() {
            assert!(label <= count, "label {label} exceeds count {count}");
            if label > 0 {
                seen[label as usize] = true;
            }
        }
        assert!(seen[1..].iter().all(|&s| s), "gap in 1..={count}");
    }
}

#[test]
fn u_shape_prongs_merge_and_numbering_is_raster_order() {
    // the two prongs are discovered first and minted separately; the
    // bridge row proves their equivalence, and compaction renumbers the
    // whole region to the first-encountered id
    let mask = mask_from_ascii(
        ".#.#.
         .#.#.
         .###.
         #....",
    );
    let (labels, count) = label_components(&mask, Connectivity::Four).unwrap();
    assert_eq!(count, 2);
    assert_eq!(
        labels_to_ascii(&labels),
        ascii_picture(
            ".1.1.
             .1.1.
             .111.
             2...."
        )
    );
}

#[test]
fn comb_with_many_teeth_collapses_to_one_component() {
    // every tooth mints its own provisional label; the spine unions all
    // of them in a single row
    let mask = mask_from_ascii(
        "#.#.#.#.#.#.#
         #.#.#.#.#.#.#
         #############",
    );
    let (labels, count) = label_components(&mask, Connectivity::Four).unwrap();
    assert_eq!(count, 1);
    assert!(labels.data().iter().all(|&l| l <= 1));
}

#[test]
fn eight_way_never_increases_component_count() {
    let masks = [
        mask_from_ascii(
            "#.#.#
             .#.#.
             #.#.#
             .#.#.",
        ),
        mask_from_ascii(
            "##..##
             ##..##
             ..##..
             ##..##",
        ),
        mask_from_ascii(
            "#....
             .#...
             ..#..
             ...#.
             ....#",
        ),
        mask_from_ascii("#"),
        mask_from_ascii("....."),
    ];
    for mask in &masks {
        let k4 = count_components(mask, Connectivity::Four).unwrap();
        let k8 = count_components(mask, Connectivity::Eight).unwrap();
        assert!(k8 <= k4, "k8 = {k8} > k4 = {k4}");
    }
}

#[test]
fn checkerboard_counts() {
    let mask = BitMask::from_fn(6, 6, |x, y| (x + y) % 2 == 0).unwrap();
    // 4-way: every foreground cell is isolated; 8-way: all diagonal
    assert_eq!(count_components(&mask, Connectivity::Four).unwrap(), 18);
    assert_eq!(count_components(&mask, Connectivity::Eight).unwrap(), 1);
}

#[test]
fn translation_leaves_count_and_size_unchanged() {
    let place = |dx: u32, dy: u32| {
        // an L-shaped tromino stamped at (dx, dy)
        BitMask::from_fn(12, 9, |x, y| {
            let (x, y) = (x.wrapping_sub(dx), y.wrapping_sub(dy));
            matches!((x, y), (0, 0) | (0, 1) | (1, 1))
        })
        .unwrap()
    };
    for conn in [Connectivity::Four, Connectivity::Eight] {
        let (a, ka) = label_components(&place(1, 1), conn).unwrap();
        let (b, kb) = label_components(&place(8, 5), conn).unwrap();
        assert_eq!(ka, 1);
        assert_eq!(kb, 1);
        assert_eq!(
            a.data().iter().filter(|&&l| l == 1).count(),
            b.data().iter().filter(|&&l| l == 1).count()
        );
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let mask = mask_from_ascii(
        "##.#..##
         #..##.#.
         ..#..###
         ##.##...",
    );
    for conn in [Connectivity::Four, Connectivity::Eight] {
        let (first, k1) = label_components(&mask, conn).unwrap();
        let (second, k2) = label_components(&mask, conn).unwrap();
        assert_eq!(k1, k2);
        assert_eq!(first.data(), second.data());
    }
}

/// Reference partition by breadth-first flood fill, for checking the
/// labels-match-reachability contract against an independent algorithm.
fn flood_partition(mask: &BitMask, conn: Connectivity) -> Vec<u32> {
    let (w, h) = (mask.width(), mask.height());
    let mut region = vec![0u32; (w as usize) * (h as usize)];
    let idx = |x: u32, y: u32| (y as usize) * (w as usize) + (x as usize);
    let mut next = 0u32;
    for sy in 0..h {
        for sx in 0..w {
            if !mask.get_unchecked(sx, sy) || region[idx(sx, sy)] != 0 {
                continue;
            }
            next += 1;
            let mut queue = VecDeque::from([(sx, sy)]);
            region[idx(sx, sy)] = next;
            while let Some((x, y)) = queue.pop_front() {
                let mut visit = |nx: u32, ny: u32| {
                    if mask.get_unchecked(nx, ny) && region[idx(nx, ny)] == 0 {
                        region[idx(nx, ny)] = next;
                        queue.push_back((nx, ny));
                    }
                };
                let diag = conn == Connectivity::Eight;
                for (dx, dy) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
                    let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                    if nx >= 0 && ny >= 0 && nx < w as i64 && ny < h as i64 {
                        visit(nx as u32, ny as u32);
                    }
                }
                if diag {
                    for (dx, dy) in [(-1i64, -1i64), (1, -1), (-1, 1), (1, 1)] {
                        let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                        if nx >= 0 && ny >= 0 && nx < w as i64 && ny < h as i64 {
                            visit(nx as u32, ny as u32);
                        }
                    }
                }
            }
        }
    }
    region
}

#[test]
fn labels_agree_with_flood_fill_partition() {
    let mask = mask_from_ascii(
        "##..#..#.#
         .#.##..###
         ....#.....
         #.#.###..#
         ##....#..#",
    );
    for conn in [Connectivity::Four, Connectivity::Eight] {
        let (labels, count) = label_components(&mask, conn).unwrap();
        let reference = flood_partition(&mask, conn);

        // the two partitions must be identical up to renaming
        let mut forward: HashMap<u32, u32> = HashMap::new();
        let mut backward: HashMap<u32, u32> = HashMap::new();
        for (i, &label) in labels.data().iter().enumerate() {
            let reference_label = reference[i];
            assert_eq!(label > 0, reference_label > 0);
            if label == 0 {
                continue;
            }
            assert_eq!(*forward.entry(label).or_insert(reference_label), reference_label);
            assert_eq!(*backward.entry(reference_label).or_insert(label), label);
        }
        assert_eq!(forward.len(), count as usize);
    }
}
