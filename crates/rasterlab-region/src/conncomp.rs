//! Connected component labeling
//!
//! Two-pass labeling of a binary mask. The first pass walks the grid
//! once in raster order, handing each foreground pixel either a fresh
//! provisional label or the smallest label among its already-visited
//! neighbors, and records label equivalences in a [`UnionFind`] forest.
//! The second pass resolves every provisional label to its root and
//! renumbers the roots into the dense range `1..=K`.
//!
//! The whole procedure is deterministic: raster order, the smallest-id
//! tie-break on assignment and merge, and first-encounter compaction
//! numbering together fix the output bit for bit. Two foreground pixels
//! end up with the same final label exactly when a path of adjacent
//! foreground pixels connects them under the chosen connectivity.

use crate::error::{RegionError, RegionResult};
use crate::unionfind::UnionFind;
use log::trace;
use rasterlab_core::{BitMask, LabelMap};

/// Neighborhood rule for component adjacency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    Four,
    /// 8-way connectivity (includes diagonals)
    Eight,
}

impl Connectivity {
    /// Create `Connectivity` from a neighborhood degree.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConnectivity`] if `degree` is not
    /// 4 or 8.
    pub fn from_degree(degree: u32) -> RegionResult<Self> {
        match degree {
            4 => Ok(Connectivity::Four),
            8 => Ok(Connectivity::Eight),
            _ => Err(RegionError::InvalidConnectivity(degree)),
        }
    }

    /// Get the neighborhood degree (4 or 8).
    pub fn degree(self) -> u32 {
        match self {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        }
    }
}

/// Label the connected foreground components of a binary mask
///
/// Returns the label map (0 for background, `1..=count` for foreground)
/// and the number of components found. Labels are assigned in the order
/// components are first discovered scanning the mask row by row, top to
/// bottom, left to right.
///
/// The function is pure: it holds no state between calls and identical
/// inputs always produce identical output, so independent masks may be
/// labeled concurrently.
///
/// # Examples
///
/// ```
/// use rasterlab_core::BitMask;
/// use rasterlab_region::{Connectivity, label_components};
///
/// // two pixels touching only diagonally
/// let mask = BitMask::from_fn(2, 2, |x, y| x == y).unwrap();
///
/// let (_, k4) = label_components(&mask, Connectivity::Four).unwrap();
/// let (_, k8) = label_components(&mask, Connectivity::Eight).unwrap();
/// assert_eq!(k4, 2);
/// assert_eq!(k8, 1);
/// ```
///
/// # Errors
///
/// The mask and connectivity are validated by their own constructors, so
/// with well-typed inputs this only fails if the output grid cannot be
/// allocated.
pub fn label_components(
    mask: &BitMask,
    connectivity: Connectivity,
) -> RegionResult<(LabelMap, u32)> {
    let mut labels = LabelMap::new(mask.width(), mask.height())?;
    let mut forest = scan_provisional(mask, connectivity, &mut labels);
    let provisional = forest.len();
    let count = compact_labels(&mut labels, &mut forest);
    trace!(
        "labeled {}x{} mask: {} provisional ids, {} components ({}-connectivity)",
        mask.width(),
        mask.height(),
        provisional,
        count,
        connectivity.degree()
    );
    Ok((labels, count))
}

/// Count the connected foreground components of a binary mask
///
/// # Errors
///
/// Same failure surface as [`label_components`].
pub fn count_components(mask: &BitMask, connectivity: Connectivity) -> RegionResult<u32> {
    let (_, count) = label_components(mask, connectivity)?;
    Ok(count)
}

/// First pass: mint provisional labels and record equivalences.
///
/// Only causal neighbors are inspected, meaning those already visited
/// under raster order: north, west, and for 8-way connectivity also
/// northwest and northeast. Directions falling outside the grid are
/// skipped. A pixel with no labeled causal neighbor starts a new
/// provisional label; otherwise it takes the smallest neighboring label
/// and every other distinct causal label is unioned with it, since the
/// pixel bridges regions that were not mutually adjacent before.
fn scan_provisional(mask: &BitMask, connectivity: Connectivity, labels: &mut LabelMap) -> UnionFind {
    let width = mask.width();
    let height = mask.height();
    let eight = connectivity == Connectivity::Eight;
    let mut forest = UnionFind::new();

    for y in 0..height {
        for x in 0..width {
            if !mask.get_unchecked(x, y) {
                continue;
            }

            let mut causal = [0u32; 4];
            let mut count = 0;
            {
                let mut note = |label: u32| {
                    if label > 0 {
                        causal[count] = label;
                        count += 1;
                    }
                };
                if y > 0 {
                    note(labels.get_unchecked(x, y - 1));
                }
                if x > 0 {
                    note(labels.get_unchecked(x - 1, y));
                }
                if eight && y > 0 {
                    if x > 0 {
                        note(labels.get_unchecked(x - 1, y - 1));
                    }
                    // the previous row is fully labeled, so northeast is causal
                    if x + 1 < width {
                        note(labels.get_unchecked(x + 1, y - 1));
                    }
                }
            }

            match causal[..count].iter().copied().min() {
                None => {
                    let id = forest.alloc();
                    labels.set_unchecked(x, y, id);
                }
                Some(min) => {
                    labels.set_unchecked(x, y, min);
                    for &other in &causal[..count] {
                        if other != min {
                            forest.union(min, other);
                        }
                    }
                }
            }
        }
    }

    forest
}

/// Second pass: renumber provisional labels into the dense range 1..=K.
///
/// Roots receive their compact id in the order their first pixel is
/// encountered in this pass, not by numeric root value, so the final
/// numbering does not depend on how path compression happened to
/// flatten the forest. Returns K, the number of distinct roots seen.
fn compact_labels(labels: &mut LabelMap, forest: &mut UnionFind) -> u32 {
    let mut root_to_compact = vec![0u32; forest.len() + 1];
    let mut next = 0u32;

    for slot in labels.data_mut() {
        let raw = *slot;
        if raw == 0 {
            continue;
        }
        // a raw label the forest never saw resolves to itself
        let root = forest.find(raw) as usize;
        if root >= root_to_compact.len() {
            root_to_compact.resize(root + 1, 0);
        }
        if root_to_compact[root] == 0 {
            next += 1;
            root_to_compact[root] = next;
        }
        *slot = root_to_compact[root];
    }

    next
}
