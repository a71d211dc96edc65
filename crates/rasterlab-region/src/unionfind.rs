//! Disjoint-set forest over provisional label ids
//!
//! The labeling scan mints provisional ids and records, through `union`,
//! which of them belong to the same physical region. Ids index directly
//! into a dense parent array: id `n` lives at `parent[n]`, so `find` and
//! `union` are amortized O(1) with nothing but a bounds check on the hot
//! path. Slot 0 is the background sentinel and is never allocated.
//!
//! The forest is ephemeral. Each labeling call builds its own and drops
//! it on return; nothing is shared across calls.

/// Disjoint-set forest (union-find) with path compression
///
/// Ids not yet allocated are treated as implicit self-rooted singletons,
/// so no operation on this structure can fail.
///
/// # Examples
///
/// ```
/// use rasterlab_region::UnionFind;
///
/// let mut forest = UnionFind::new();
/// let a = forest.alloc();
/// let b = forest.alloc();
/// forest.union(a, b);
/// assert_eq!(forest.find(a), forest.find(b));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    /// parent[id] is the id's parent; roots are their own parent.
    parent: Vec<u32>,
}

impl UnionFind {
    /// Create an empty forest.
    pub fn new() -> Self {
        UnionFind { parent: vec![0] }
    }

    /// Mint the next id as its own root and return it.
    ///
    /// Ids are handed out consecutively starting from 1.
    pub fn alloc(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    /// Number of ids allocated so far.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Whether no ids have been allocated.
    pub fn is_empty(&self) -> bool {
        self.parent.len() == 1
    }

    /// Resolve `id` to the root of its equivalence class.
    ///
    /// Every node visited on the way up is re-parented directly to the
    /// root, so repeated lookups flatten to a single hop. The walk is
    /// iterative; chain length is bounded by the grid size, not the
    /// stack. An id that was never allocated is its own root.
    pub fn find(&mut self, id: u32) -> u32 {
        if (id as usize) >= self.parent.len() {
            return id;
        }
        let mut root = id;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = id;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Merge the equivalence classes of `a` and `b`.
    ///
    /// The numerically smaller root becomes the parent, so the earliest
    /// minted id always survives a merge and the outcome is independent
    /// of the order unions are issued. Merging ids that already share a
    /// root is a no-op. Unallocated ids materialize as singletons first.
    pub fn union(&mut self, a: u32, b: u32) {
        let max = a.max(b) as usize;
        while self.parent.len() <= max {
            self.parent.push(self.parent.len() as u32);
        }
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        if ra < rb {
            self.parent[rb as usize] = ra;
        } else {
            self.parent[ra as usize] = rb;
        }
    }
}
