//! Random Replacement Policy.
//!
//! Evicts a uniformly-drawn way. Uses a simple xorshift generator rather
//! than a full RNG crate: victim selection needs speed and repeatability,
//! not statistical quality, and a fixed seed keeps simulation runs
//! deterministic.

use super::ReplacementPolicy;

/// Random policy state.
#[derive(Debug)]
pub struct RandomPolicy {
    /// Number of ways in the cache.
    ways: usize,
    /// Internal xorshift state.
    state: u64,
}

impl RandomPolicy {
    /// Creates a new Random policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets (unused; this policy keeps no per-set state).
    /// * `ways` - The associativity (number of ways) of the cache.
    pub const fn new(_sets: usize, ways: usize) -> Self {
        Self {
            ways,
            state: 88172645463325252,
        }
    }
}

impl ReplacementPolicy for RandomPolicy {
    /// Recency is irrelevant to random replacement.
    fn touch(&mut self, _set: usize, _way: usize) {}

    /// Installations do not affect the draw.
    fn install(&mut self, _set: usize, _way: usize) {}

    /// Advances the xorshift state and maps it to a way index.
    fn victim(&mut self, _set: usize) -> usize {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x as usize) % self.ways
    }
}
