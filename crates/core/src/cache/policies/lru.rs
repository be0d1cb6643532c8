//! Exact LRU Replacement Policy (counter-based).
//!
//! Each line carries an age counter. A hit or installation zeroes the
//! touched line's counter and ages every other line in the set by one; the
//! victim is the line with the maximum age, ties broken toward the lowest
//! way index. Exact recency ordering at O(ways) per access — the reference
//! the pseudo-LRU variants approximate.

use super::ReplacementPolicy;

/// Exact-LRU policy state.
#[derive(Debug)]
pub struct LruPolicy {
    /// Per-line age counters, indexed `set * ways + way`.
    age: Vec<u64>,
    /// Number of ways in the cache.
    ways: usize,
}

impl LruPolicy {
    /// Creates a new exact-LRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            age: vec![0; sets * ways],
            ways,
        }
    }

    /// Zeroes `way`'s age and ages the rest of the set.
    fn refresh(&mut self, set: usize, way: usize) {
        let base = set * self.ways;
        for w in 0..self.ways {
            if w == way {
                self.age[base + w] = 0;
            } else {
                self.age[base + w] += 1;
            }
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    fn touch(&mut self, set: usize, way: usize) {
        self.refresh(set, way);
    }

    fn install(&mut self, set: usize, way: usize) {
        self.refresh(set, way);
    }

    /// Returns the way with the maximum age (first found on a tie).
    fn victim(&mut self, set: usize) -> usize {
        let base = set * self.ways;
        let mut victim = 0;
        let mut oldest = self.age[base];
        for w in 1..self.ways {
            if self.age[base + w] > oldest {
                oldest = self.age[base + w];
                victim = w;
            }
        }
        victim
    }
}
