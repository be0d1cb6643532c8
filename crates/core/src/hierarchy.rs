//! Hierarchy construction and the client-facing access surface.
//!
//! Builds the chain `MainMemory → Ln → … → L1` from a validated
//! [`Config`], bottom-up, each level owning the one below it. The hierarchy
//! is constructed once, lives for the process, and is driven by exactly one
//! single-threaded client through the top level's byte/word accessors.

use crate::cache::Cache;
use crate::common::error::ConfigError;
use crate::config::Config;
use crate::mem::ram::MainMemory;
use crate::mem::traits::Storage;
use crate::stats::{LevelStats, MemoryStats};

/// An owned cache chain over a backing store.
///
/// All client traffic goes through the top level; lower levels are reached
/// only by miss propagation and write-backs. Telemetry for every level is
/// available through [`Self::level_stats`] and [`Self::memory_stats`].
#[derive(Debug)]
pub struct CacheHierarchy {
    top: Cache,
    depth: usize,
}

impl CacheHierarchy {
    /// Builds a hierarchy from `config`.
    ///
    /// Levels are listed top first in the configuration; construction runs
    /// bottom-up so each level can take ownership of the storage below it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails
    /// [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let depth = config.levels.len();

        let miss_cost = config.memory.access_cost;
        let mut below: Box<dyn Storage> = Box::new(MainMemory::new(&config.memory));
        for (i, level) in config.levels.iter().enumerate().skip(1).rev() {
            let label = format!("L{}", i + 1);
            below = Box::new(Cache::new(label, level, miss_cost, below));
        }
        let top = Cache::new("L1", &config.levels[0], miss_cost, below);

        Ok(Self { top, depth })
    }

    /// Number of cache levels.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The top (L1) cache level.
    pub const fn top(&self) -> &Cache {
        &self.top
    }

    /// The mutable top (L1) cache level.
    pub const fn top_mut(&mut self) -> &mut Cache {
        &mut self.top
    }

    /// Reads a byte through the hierarchy.
    pub fn read_byte(&mut self, addr: u64) -> u8 {
        self.top.read_byte(addr)
    }

    /// Writes a byte through the hierarchy (write-allocate, write-back).
    pub fn write_byte(&mut self, addr: u64, value: u8) {
        self.top.write_byte(addr, value);
    }

    /// Reads an aligned 16-bit value, most-significant byte first.
    pub fn read_u16(&mut self, addr: u64) -> u16 {
        self.top.read_u16(addr)
    }

    /// Writes an aligned 16-bit value, most-significant byte first.
    pub fn write_u16(&mut self, addr: u64, value: u16) {
        self.top.write_u16(addr, value);
    }

    /// Reads an aligned 32-bit value, most-significant byte first.
    pub fn read_u32(&mut self, addr: u64) -> u32 {
        self.top.read_u32(addr)
    }

    /// Writes an aligned 32-bit value, most-significant byte first.
    pub fn write_u32(&mut self, addr: u64, value: u32) {
        self.top.write_u32(addr, value);
    }

    /// Snapshots the counters of every cache level, top first.
    pub fn level_stats(&self) -> Vec<LevelStats> {
        let mut out = Vec::with_capacity(self.depth);
        let mut node: &dyn Storage = &self.top;
        while let Some(cache) = node.as_cache() {
            out.push(LevelStats {
                label: cache.label().to_owned(),
                stats: *cache.stats(),
            });
            node = cache.next();
        }
        out
    }

    /// Snapshots the backing store's counters.
    pub fn memory_stats(&self) -> MemoryStats {
        self.top
            .backing()
            .map(|mem| *mem.stats())
            .unwrap_or_default()
    }

    /// Zeroes the interval counters of every level and the backing store.
    ///
    /// Lifetime totals and running costs are untouched.
    pub fn reset_stats(&mut self) {
        self.top.reset_stats_chain();
    }

    /// Toggles simulated backing-store latency accrual.
    pub fn set_artificial_delay(&mut self, enabled: bool) {
        if let Some(mem) = self.top.backing_mut() {
            mem.set_artificial_delay(enabled);
        }
    }

    /// Formats a report covering every level and the backing store.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for level in self.level_stats() {
            out.push_str(&level.to_string());
            out.push('\n');
        }
        out.push_str(&self.memory_stats().to_string());
        out.push('\n');
        out
    }
}
