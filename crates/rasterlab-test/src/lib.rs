//! rasterlab-test - Test fixtures for the rasterlab workspace
//!
//! Builders that turn small ASCII pictures into grid containers, so
//! tests can state their inputs and expected outputs visually:
//!
//! ```
//! use rasterlab_test::mask_from_ascii;
//!
//! let mask = mask_from_ascii("#.#\n#.#\n###");
//! assert_eq!(mask.count_foreground(), 7);
//! ```
//!
//! All builders panic on malformed pictures; they are meant for test
//! code only, where a panic is the right failure mode.

use rasterlab_core::{BitMask, GrayImage, LabelMap};

fn picture_rows(picture: &str) -> Vec<&str> {
    let rows: Vec<&str> = picture
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert!(!rows.is_empty(), "picture has no rows");
    let width = rows[0].len();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            width,
            "picture row {y} has length {}, expected {width}",
            row.len()
        );
    }
    rows
}

/// Build a [`BitMask`] from an ASCII picture.
///
/// `#` marks foreground and `.` marks background. Rows are trimmed, so
/// the picture can be indented; blank lines are skipped.
pub fn mask_from_ascii(picture: &str) -> BitMask {
    let rows = picture_rows(picture);
    let width = rows[0].len() as u32;
    let height = rows.len() as u32;
    let mut mask = BitMask::new(width, height).expect("picture dimensions");
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            match ch {
                '#' => mask.set_unchecked(x as u32, y as u32, true),
                '.' => {}
                _ => panic!("unexpected character {ch:?} in mask picture"),
            }
        }
    }
    mask
}

/// Build a [`GrayImage`] from rows of raw pixel values.
///
/// All rows must have the same length.
pub fn gray_from_rows(rows: &[&[u8]]) -> GrayImage {
    assert!(!rows.is_empty(), "no rows given");
    let width = rows[0].len();
    let data: Vec<u8> = rows
        .iter()
        .flat_map(|row| {
            assert_eq!(row.len(), width, "ragged rows");
            row.iter().copied()
        })
        .collect();
    GrayImage::from_raw(width as u32, rows.len() as u32, data).expect("row dimensions")
}

/// Render a [`LabelMap`] as an ASCII picture.
///
/// Background renders as `.`, labels 1 through 9 as their digit. Maps
/// with larger labels are rejected; fixtures are supposed to stay small.
pub fn labels_to_ascii(labels: &LabelMap) -> String {
    let mut out = String::new();
    for y in 0..labels.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..labels.width() {
            let label = labels.get_unchecked(x, y);
            match label {
                0 => out.push('.'),
                1..=9 => out.push(char::from(b'0' + label as u8)),
                _ => panic!("label {label} too large for an ASCII picture"),
            }
        }
    }
    out
}

/// Normalize an expected ASCII picture for comparison with
/// [`labels_to_ascii`] output: trims indentation and blank lines.
pub fn ascii_picture(picture: &str) -> String {
    picture_rows(picture).join("\n")
}
