//! History-compensated tree pseudo-LRU Replacement Policy.
//!
//! The plain tree PLRU writes a node's steering bit on every access, so a
//! burst of hits on one side of a subtree can immediately redirect the
//! victim walk and evict a recently-used line on the other side. This
//! variant pairs every internal node with a history bit: an access writes
//! its direction into the history, while the live steering bit inherits the
//! *previous* history value. A node therefore only changes direction once
//! two consecutive accesses agree, damping the bias that asymmetric access
//! patterns induce in the plain tree.
//!
//! Leaf-level nodes have no ambiguity to damp and are written directly.
//! Node indexing matches [`super::tree_plru`]; requires a power-of-two way
//! count.

use super::ReplacementPolicy;

/// History-compensated tree-PLRU policy state.
#[derive(Debug)]
pub struct HistoryPlruPolicy {
    /// Live steering bits, indexed `set * ways + node`; `true` steers right.
    nodes: Vec<bool>,
    /// Parallel history bits recording the most recent direction per node.
    history: Vec<bool>,
    /// Number of ways in the cache (power of two).
    ways: usize,
}

impl HistoryPlruPolicy {
    /// Creates a new history-compensated tree-PLRU policy instance.
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
            "history PLRU requires a power-of-two way count, got {ways}"
        );
        Self {
            nodes: vec![false; sets * ways],
            history: vec![false; sets * ways],
            ways,
        }
    }

    /// Walks the path to `way`, steering internal nodes away from it through
    /// the history and writing the leaf-level node directly.
    fn point_away(&mut self, set: usize, way: usize) {
        if self.ways == 1 {
            return;
        }
        let base = set * self.ways;
        let mut node = self.ways / 2;
        let mut step = self.ways / 2;
        loop {
            step /= 2;
            let steer_right = way < node;
            if step == 0 {
                self.nodes[base + node] = steer_right;
                return;
            }
            // Internal node: the live bit inherits the previous history and
            // the history records the new direction.
            self.nodes[base + node] = self.history[base + node];
            self.history[base + node] = steer_right;
            if steer_right {
                node -= step;
            } else {
                node += step;
            }
        }
    }
}

impl ReplacementPolicy for HistoryPlruPolicy {
    fn touch(&mut self, set: usize, way: usize) {
        self.point_away(set, way);
    }

    fn install(&mut self, set: usize, way: usize) {
        self.point_away(set, way);
    }

    /// Follows the live bits to a leaf; internal nodes pass through the
    /// history (live inherits it, history records the direction away from
    /// the reclaimed leaf) and the leaf-level node is flipped directly.
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
            if step == 0 {
                // Leaf-level node `n` covers leaves `n - 1` and `n`.
                self.nodes[base + node] = !right;
                return if right { node } else { node - 1 };
            }
            self.nodes[base + node] = self.history[base + node];
            // Steer subsequent walks away from the side being reclaimed.
            self.history[base + node] = !right;
            if right {
                node += step;
            } else {
                node -= step;
            }
        }
    }
}
