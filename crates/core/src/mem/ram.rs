//! Simulated slow RAM: the backing store at the bottom of the hierarchy.
//!
//! A flat byte buffer addressed in whole lines. Every address maps to exactly
//! one slot: no tags, no validity, no eviction. Accesses accrue a fixed high
//! cost into the store's own counter while the artificial-delay toggle is on;
//! turning it off lets a driving application exclude work it does not want
//! measured (rendering, state loading) from the counters.

use tracing::trace;

use crate::common::addr::is_line_aligned;
use crate::common::constants::LINE_BYTES;
use crate::config::MemoryConfig;
use crate::mem::line::CacheLine;
use crate::mem::traits::Storage;
use crate::stats::MemoryStats;

/// The backing store: a pre-allocated flat buffer with line-granular access.
#[derive(Debug)]
pub struct MainMemory {
    data: Vec<u8>,
    access_cost: u64,
    artificial_delay: bool,
    stats: MemoryStats,
}

impl MainMemory {
    /// Creates a zero-filled backing store from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the configured size is not a whole positive number of lines
    /// (callers validate via [`crate::config::Config::validate`] first).
    pub fn new(config: &MemoryConfig) -> Self {
        assert!(
            config.size_bytes > 0 && config.size_bytes.is_multiple_of(LINE_BYTES),
            "backing store size {} is not a whole number of lines",
            config.size_bytes
        );
        Self {
            data: vec![0; config.size_bytes],
            access_cost: config.access_cost,
            artificial_delay: config.artificial_delay,
            stats: MemoryStats::default(),
        }
    }

    /// Total size of the store in bytes.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the store has zero capacity (never, once built).
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether accesses currently accrue simulated latency.
    pub const fn artificial_delay(&self) -> bool {
        self.artificial_delay
    }

    /// Enables or disables latency accrual for subsequent accesses.
    pub const fn set_artificial_delay(&mut self, enabled: bool) {
        self.artificial_delay = enabled;
    }

    /// Access statistics for this store.
    pub const fn stats(&self) -> &MemoryStats {
        &self.stats
    }

    /// One access worth of simulated latency, when enabled.
    const fn charge(&mut self) {
        if self.artificial_delay {
            self.stats.total_cost += self.access_cost;
        }
    }

    /// Maps a line-aligned address to its buffer offset, failing fast on a
    /// misaligned or out-of-range address.
    fn slot(&self, addr: u64) -> usize {
        assert!(
            is_line_aligned(addr),
            "backing store address {addr:#x} is not line-aligned"
        );
        let offset = addr as usize;
        assert!(
            offset + LINE_BYTES <= self.data.len(),
            "backing store address {addr:#x} is out of range"
        );
        offset
    }
}

impl Storage for MainMemory {
    fn read_line(&mut self, addr: u64, is_write: bool) -> CacheLine {
        let offset = self.slot(addr);
        self.stats.reads += 1;
        self.stats.total_reads += 1;
        self.charge();
        trace!(addr, is_write, "ram read");
        let mut data = [0; LINE_BYTES];
        data.copy_from_slice(&self.data[offset..offset + LINE_BYTES]);
        CacheLine::fetched(addr, data)
    }

    fn write_line(&mut self, addr: u64, line: &CacheLine) {
        let offset = self.slot(addr);
        self.stats.writes += 1;
        self.stats.total_writes += 1;
        self.charge();
        trace!(addr, "ram write");
        self.data[offset..offset + LINE_BYTES].copy_from_slice(&line.data);
    }

    fn reset_stats(&mut self) {
        self.stats.reset_interval();
    }

    fn as_memory(&self) -> Option<&MainMemory> {
        Some(self)
    }

    fn as_memory_mut(&mut self) -> Option<&mut MainMemory> {
        Some(self)
    }
}
