//! Bit pseudo-LRU Replacement Policy.
//!
//! One marker bit per line: a hit or installation marks the line as recently
//! used. The victim is the first line whose marker is clear; once every line
//! in a set has been marked, all markers are cleared and way 0 is reclaimed.
//! The cheapest LRU approximation — one bit per line, no tree.

use super::ReplacementPolicy;

/// Bit-PLRU policy state.
#[derive(Debug)]
pub struct BitPlruPolicy {
    /// One recently-used marker per line, indexed `set * ways + way`.
    marked: Vec<bool>,
    /// Number of ways in the cache.
    ways: usize,
}

impl BitPlruPolicy {
    /// Creates a new Bit-PLRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            marked: vec![false; sets * ways],
            ways,
        }
    }
}

impl ReplacementPolicy for BitPlruPolicy {
    /// Marks the hit line as recently used.
    fn touch(&mut self, set: usize, way: usize) {
        self.marked[set * self.ways + way] = true;
    }

    /// Fresh lines start out marked, protecting them from the next victim
    /// scan.
    fn install(&mut self, set: usize, way: usize) {
        self.marked[set * self.ways + way] = true;
    }

    /// Returns the first unmarked way; wraps by clearing every marker and
    /// picking way 0 once the set is saturated.
    fn victim(&mut self, set: usize) -> usize {
        let base = set * self.ways;
        if let Some(way) = (0..self.ways).find(|&w| !self.marked[base + w]) {
            return way;
        }
        for w in 0..self.ways {
            self.marked[base + w] = false;
        }
        0
    }
}
