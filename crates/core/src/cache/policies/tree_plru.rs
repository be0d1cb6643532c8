//! Tree pseudo-LRU (PLRU) Replacement Policy.
//!
//! Approximates LRU with one bit per internal node of a balanced binary tree
//! over the ways (requires a power-of-two way count). A node bit steers the
//! victim walk: clear means left, set means right. Touching a leaf writes
//! every node on its path to steer away from it; the victim walk follows the
//! bits to a leaf, flipping each node as it passes so the reclaimed way is
//! protected next time.
//!
//! Node indices follow the binary-search layout over way positions: the root
//! sits at `ways / 2`, its children at `ways / 2 ± ways / 4`, down to the
//! odd indices whose two children are adjacent leaves. Index 0 is unused.

use super::ReplacementPolicy;

/// Tree-PLRU policy state.
#[derive(Debug)]
pub struct TreePlruPolicy {
    /// Node bits, indexed `set * ways + node`; `true` steers right.
    nodes: Vec<bool>,
    /// Number of ways in the cache (power of two).
    ways: usize,
}

impl TreePlruPolicy {
    /// Creates a new Tree-PLRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity; must be a power of two.
    ///
    /// # Panics
    ///
    /// Panics if `ways` is not a power of two (rejected earlier by
    /// [`crate::config::Config::validate`]).
    pub fn new(sets: usize, ways: usize) -> Self {
        assert!(
            ways.is_power_of_two(),
            "tree PLRU requires a power-of-two way count, got {ways}"
        );
        Self {
            nodes: vec![false; sets * ways],
            ways,
        }
    }

    /// Writes every node on the path to `way` to steer the victim walk away
    /// from it.
    fn point_away(&mut self, set: usize, way: usize) {
        if self.ways == 1 {
            return;
        }
        let base = set * self.ways;
        let mut node = self.ways / 2;
        let mut step = self.ways / 2;
        loop {
            step /= 2;
            if way < node {
                // Leaf is in the left subtree; steer the walk right.
                self.nodes[base + node] = true;
                if step == 0 {
                    return;
                }
                node -= step;
            } else {
                self.nodes[base + node] = false;
                if step == 0 {
                    return;
                }
                node += step;
            }
        }
    }
}

impl ReplacementPolicy for TreePlruPolicy {
    fn touch(&mut self, set: usize, way: usize) {
        self.point_away(set, way);
    }

    fn install(&mut self, set: usize, way: usize) {
        self.point_away(set, way);
    }

    /// Walks the tree from the root, following each node bit and flipping it
    /// in passing; the leaf reached is the victim.
    fn victim(&mut self, set: usize) -> usize {
        if self.ways == 1 {
            return 0;
        }
        let base = set * self.ways;
        let mut node = self.ways / 2;
        let mut step = self.ways / 2;
        loop {
            step /= 2;
            let right = self.nodes[base + node];
            self.nodes[base + node] = !right;
            if right {
                if step == 0 {
                    // Leaf-level node `n` covers leaves `n - 1` and `n`.
                    return node;
                }
                node += step;
            } else {
                if step == 0 {
                    return node - 1;
                }
                node -= step;
            }
        }
    }
}
