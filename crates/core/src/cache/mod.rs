//! N-way set-associative cache level.
//!
//! A level owns a contiguous arena of lines (indexed `set * ways + way`), a
//! victim-selection policy, and the storage below it — either another level
//! or the backing store — so levels compose into a chain through the
//! [`Storage`] trait. Semantics are write-allocate (a write first forces the
//! line resident at this level) and write-back (dirty lines propagate down
//! only when evicted). Byte and aligned 16/32-bit accessors sit on top of
//! the line-granular path.

/// Eviction policy implementations.
pub mod policies;

use tracing::trace;

use self::policies::{
    BitPlruPolicy, FifoPolicy, HistoryPlruPolicy, LruPolicy, RandomPolicy, ReplacementPolicy,
    TreePlruPolicy,
};
use crate::common::addr::{is_line_aligned, line_base, offset, set_index};
use crate::common::constants::LINE_BYTES;
use crate::config::{CacheLevelConfig, EvictionPolicy};
use crate::mem::line::CacheLine;
use crate::mem::traits::Storage;
use crate::stats::CacheStats;

/// One cache level: a set-associative array of lines in front of the next
/// storage down.
///
/// Cost accounting: every hit adds this level's access cost to the running
/// total; every miss adds the configured miss cost (the backing-store
/// access cost). Charging the flat backing cost for a miss at every level is
/// a deliberate modeling simplification — the true cost of a miss is
/// whatever the level below actually incurs, which only coincides with the
/// flat cost at the lowest level.
pub struct Cache {
    label: String,
    lines: Vec<CacheLine>,
    num_sets: usize,
    ways: usize,
    access_cost: u64,
    miss_cost: u64,
    policy: Box<dyn ReplacementPolicy>,
    next: Box<dyn Storage>,
    stats: CacheStats,
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("label", &self.label)
            .field("num_sets", &self.num_sets)
            .field("ways", &self.ways)
            .field("access_cost", &self.access_cost)
            .field("miss_cost", &self.miss_cost)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Cache {
    /// Creates a cache level from `config`, backed by `next`.
    ///
    /// `label` names the level in reports ("L1", "L2", ...); `miss_cost` is
    /// the flat cost charged per miss (the backing-store access cost).
    ///
    /// # Panics
    ///
    /// Panics on unusable geometry — zero ways, a capacity that is not a
    /// whole multiple of `ways` lines, a non-power-of-two set count, or a
    /// tree policy with a non-power-of-two way count. Build through
    /// [`crate::hierarchy::CacheHierarchy`] to get these as
    /// [`crate::common::ConfigError`] values instead.
    pub fn new(
        label: impl Into<String>,
        config: &CacheLevelConfig,
        miss_cost: u64,
        next: Box<dyn Storage>,
    ) -> Self {
        let label = label.into();
        assert!(config.ways > 0, "{label}: way count must be non-zero");
        assert!(
            config.capacity_bytes > 0
                && config.capacity_bytes.is_multiple_of(LINE_BYTES * config.ways),
            "{label}: capacity {} is not a whole multiple of {} ways of lines",
            config.capacity_bytes,
            config.ways
        );
        let num_sets = config.num_sets();
        assert!(
            num_sets.is_power_of_two(),
            "{label}: set count {num_sets} is not a power of two"
        );

        let policy: Box<dyn ReplacementPolicy> = match config.policy {
            EvictionPolicy::Random => Box::new(RandomPolicy::new(num_sets, config.ways)),
            EvictionPolicy::Fifo => Box::new(FifoPolicy::new(num_sets, config.ways)),
            EvictionPolicy::BitPlru => Box::new(BitPlruPolicy::new(num_sets, config.ways)),
            EvictionPolicy::TreePlru => Box::new(TreePlruPolicy::new(num_sets, config.ways)),
            EvictionPolicy::HistoryPlru => Box::new(HistoryPlruPolicy::new(num_sets, config.ways)),
            EvictionPolicy::Lru => Box::new(LruPolicy::new(num_sets, config.ways)),
        };

        Self {
            label,
            lines: vec![CacheLine::default(); num_sets * config.ways],
            num_sets,
            ways: config.ways,
            access_cost: config.access_cost,
            miss_cost,
            policy,
            next,
            stats: CacheStats::default(),
        }
    }

    /// Level label used in reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of sets at this level.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Associativity of this level.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// This level's statistics counters.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// The storage below this level.
    pub fn next(&self) -> &dyn Storage {
        &*self.next
    }

    /// The mutable storage below this level.
    pub fn next_mut(&mut self) -> &mut dyn Storage {
        &mut *self.next
    }

    /// Walks down to the backing store at the bottom of this chain.
    pub fn backing(&self) -> Option<&crate::mem::ram::MainMemory> {
        if let Some(mem) = self.next.as_memory() {
            return Some(mem);
        }
        self.next.as_cache().and_then(Self::backing)
    }

    /// Walks down to the mutable backing store at the bottom of this chain.
    pub fn backing_mut(&mut self) -> Option<&mut crate::mem::ram::MainMemory> {
        if self.next.as_memory().is_some() {
            return self.next.as_memory_mut();
        }
        self.next.as_cache_mut().and_then(Self::backing_mut)
    }

    /// Zeroes the interval counters of this level and every level below it.
    pub fn reset_stats_chain(&mut self) {
        self.stats.reset_interval();
        if let Some(cache) = self.next.as_cache_mut() {
            cache.reset_stats_chain();
        } else {
            self.next.reset_stats();
        }
    }

    /// Reads a single byte, pulling the owning line to this level on a miss.
    pub fn read_byte(&mut self, addr: u64) -> u8 {
        let line = self.read_line(line_base(addr), false);
        line.data[offset(addr)]
    }

    /// Writes a single byte: write-allocate, then mark the line dirty.
    ///
    /// The write is not propagated to the level below until the line is
    /// evicted.
    pub fn write_byte(&mut self, addr: u64, value: u8) {
        let mut line = self.read_line(line_base(addr), true);
        line.data[offset(addr)] = value;
        self.update_resident(line_base(addr), &line.data);
    }

    /// Reads an aligned 16-bit value, most-significant byte first.
    ///
    /// Accesses that straddle a line boundary are unsupported: the offset
    /// indexing panics rather than silently splitting the access.
    pub fn read_u16(&mut self, addr: u64) -> u16 {
        let line = self.read_line(line_base(addr), false);
        let off = offset(addr);
        (u16::from(line.data[off]) << 8) | u16::from(line.data[off + 1])
    }

    /// Reads an aligned 32-bit value, most-significant byte first.
    ///
    /// Accesses that straddle a line boundary are unsupported: the offset
    /// indexing panics rather than silently splitting the access.
    pub fn read_u32(&mut self, addr: u64) -> u32 {
        let line = self.read_line(line_base(addr), false);
        let off = offset(addr);
        (u32::from(line.data[off]) << 24)
            | (u32::from(line.data[off + 1]) << 16)
            | (u32::from(line.data[off + 2]) << 8)
            | u32::from(line.data[off + 3])
    }

    /// Writes an aligned 16-bit value, most-significant byte first.
    ///
    /// Same line-boundary limitation as [`Self::read_u16`].
    pub fn write_u16(&mut self, addr: u64, value: u16) {
        let mut line = self.read_line(line_base(addr), true);
        let off = offset(addr);
        line.data[off] = (value >> 8) as u8;
        line.data[off + 1] = value as u8;
        self.update_resident(line_base(addr), &line.data);
    }

    /// Writes an aligned 32-bit value, most-significant byte first.
    ///
    /// Same line-boundary limitation as [`Self::read_u32`].
    pub fn write_u32(&mut self, addr: u64, value: u32) {
        let mut line = self.read_line(line_base(addr), true);
        let off = offset(addr);
        line.data[off] = (value >> 24) as u8;
        line.data[off + 1] = (value >> 16) as u8;
        line.data[off + 2] = (value >> 8) as u8;
        line.data[off + 3] = value as u8;
        self.update_resident(line_base(addr), &line.data);
    }

    /// Replaces the payload of the resident line for `addr` and marks it
    /// dirty. The caller must have made the line resident first (the write
    /// paths do, via `read_line` with the write flag).
    fn update_resident(&mut self, addr: u64, data: &[u8; LINE_BYTES]) {
        let base = set_index(addr, self.num_sets) * self.ways;
        for way in 0..self.ways {
            let line = &mut self.lines[base + way];
            if line.valid && line.tag == addr {
                line.data = *data;
                line.dirty = true;
                return;
            }
        }
        unreachable!("line {addr:#x} absent after write-allocate fill");
    }

    /// Miss path: fetch the line from below and install it, preferring an
    /// invalid way (cold fill) and otherwise evicting the policy's victim,
    /// writing it back first if dirty.
    fn fill(&mut self, addr: u64, is_write: bool) -> CacheLine {
        let fetched = self.next.read_line(addr, is_write);
        let installed = CacheLine::fetched(addr, fetched.data);
        let set = set_index(addr, self.num_sets);
        let base = set * self.ways;

        if let Some(way) = (0..self.ways).find(|&w| !self.lines[base + w].valid) {
            trace!(level = %self.label, addr, set, way, "cold fill");
            self.lines[base + way] = installed;
            self.stats.record_cold_fill(is_write);
            self.policy.install(set, way);
            return installed;
        }

        let way = self.policy.victim(set);
        let idx = base + way;
        if self.lines[idx].dirty {
            trace!(level = %self.label, victim = self.lines[idx].tag, "write-back");
            let victim = self.lines[idx];
            self.next.write_line(victim.tag, &victim);
        }
        trace!(level = %self.label, addr, set, way, "evict and install");
        self.lines[idx] = installed;
        self.stats.record_eviction(is_write);
        self.policy.install(set, way);
        installed
    }
}

impl Storage for Cache {
    /// The core lookup: scans the addressed set and returns the line,
    /// pulling it in through the miss path when absent.
    fn read_line(&mut self, addr: u64, is_write: bool) -> CacheLine {
        assert!(
            is_line_aligned(addr),
            "{}: read_line address {addr:#x} is not line-aligned",
            self.label
        );
        if is_write {
            self.stats.writes += 1;
        } else {
            self.stats.reads += 1;
        }

        let set = set_index(addr, self.num_sets);
        let base = set * self.ways;
        for way in 0..self.ways {
            let line = self.lines[base + way];
            if line.valid && line.tag == addr {
                self.stats.record_hit(is_write);
                self.stats.total_cost += self.access_cost;
                self.policy.touch(set, way);
                return line;
            }
        }

        self.stats.record_miss(is_write);
        self.stats.total_cost += self.miss_cost;
        self.fill(addr, is_write)
    }

    /// Full-line write: write-allocate through the read path, then replace
    /// the payload in place and mark it dirty.
    fn write_line(&mut self, addr: u64, line: &CacheLine) {
        assert!(
            is_line_aligned(addr),
            "{}: write_line address {addr:#x} is not line-aligned",
            self.label
        );
        let _ = self.read_line(addr, true);
        self.update_resident(addr, &line.data);
    }

    fn reset_stats(&mut self) {
        self.stats.reset_interval();
    }

    fn as_cache(&self) -> Option<&Cache> {
        Some(self)
    }

    fn as_cache_mut(&mut self) -> Option<&mut Cache> {
        Some(self)
    }
}
