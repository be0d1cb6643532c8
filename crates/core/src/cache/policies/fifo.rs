//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! Evicts the oldest line in a set regardless of how recently it was hit.
//! Each set carries one rotating pointer; a victim request returns the
//! pointer and advances it. Cold fills populate ways in index order while
//! the pointer stays at 0, so the first eviction reclaims the first line
//! installed.

use super::ReplacementPolicy;

/// FIFO policy state.
#[derive(Debug)]
pub struct FifoPolicy {
    /// The next way to be evicted, per set.
    next_way: Vec<usize>,
    /// Number of ways in the cache.
    ways: usize,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            next_way: vec![0; sets],
            ways,
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    /// Recency is irrelevant to FIFO.
    fn touch(&mut self, _set: usize, _way: usize) {}

    /// Installation order is already captured by the pointer advance in
    /// [`Self::victim`] and by in-order cold fills.
    fn install(&mut self, _set: usize, _way: usize) {}

    /// Returns the current pointer and advances it round-robin.
    fn victim(&mut self, set: usize) -> usize {
        let way = self.next_way[set];
        self.next_way[set] = (way + 1) % self.ways;
        way
    }
}
