//! Per-level statistics collection and reporting.
//!
//! Counters come in two tiers. The interval tier (hits, misses, evictions,
//! cold fills, raw access counts, all split by read/write) is zeroed by
//! `reset_stats` so a driving application can report instantaneous rates
//! every frame. The cumulative tier (lifetime hit/miss totals and the
//! running cost) survives resets.

use std::fmt;

/// Statistics counters for one cache level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Read accesses since the last reset.
    pub reads: u64,
    /// Write accesses since the last reset.
    pub writes: u64,
    /// Read hits since the last reset.
    pub read_hits: u64,
    /// Read misses since the last reset.
    pub read_misses: u64,
    /// Write hits since the last reset.
    pub write_hits: u64,
    /// Write misses since the last reset.
    pub write_misses: u64,
    /// Lines installed into a previously invalid way on the read path since
    /// the last reset.
    pub read_cold_fills: u64,
    /// Lines installed into a previously invalid way on the write path since
    /// the last reset.
    pub write_cold_fills: u64,
    /// Valid lines displaced on the read path since the last reset.
    pub read_evictions: u64,
    /// Valid lines displaced on the write path since the last reset.
    pub write_evictions: u64,

    /// Lifetime read hits (survives resets).
    pub total_read_hits: u64,
    /// Lifetime read misses (survives resets).
    pub total_read_misses: u64,
    /// Lifetime write hits (survives resets).
    pub total_write_hits: u64,
    /// Lifetime write misses (survives resets).
    pub total_write_misses: u64,
    /// Running access cost in abstract cycles (survives resets).
    pub total_cost: u64,
}

impl CacheStats {
    /// Records a hit on the read or write path (both tiers).
    pub(crate) const fn record_hit(&mut self, is_write: bool) {
        if is_write {
            self.write_hits += 1;
            self.total_write_hits += 1;
        } else {
            self.read_hits += 1;
            self.total_read_hits += 1;
        }
    }

    /// Records a miss on the read or write path (both tiers).
    pub(crate) const fn record_miss(&mut self, is_write: bool) {
        if is_write {
            self.write_misses += 1;
            self.total_write_misses += 1;
        } else {
            self.read_misses += 1;
            self.total_read_misses += 1;
        }
    }

    /// Records a cold fill (installation into an invalid way).
    pub(crate) const fn record_cold_fill(&mut self, is_write: bool) {
        if is_write {
            self.write_cold_fills += 1;
        } else {
            self.read_cold_fills += 1;
        }
    }

    /// Records an eviction (installation displacing a valid line).
    pub(crate) const fn record_eviction(&mut self, is_write: bool) {
        if is_write {
            self.write_evictions += 1;
        } else {
            self.read_evictions += 1;
        }
    }

    /// Zeroes the interval tier; lifetime totals and cost are untouched.
    pub const fn reset_interval(&mut self) {
        self.reads = 0;
        self.writes = 0;
        self.read_hits = 0;
        self.read_misses = 0;
        self.write_hits = 0;
        self.write_misses = 0;
        self.read_cold_fills = 0;
        self.write_cold_fills = 0;
        self.read_evictions = 0;
        self.write_evictions = 0;
    }

    /// Interval hits, read and write combined.
    pub const fn hits(&self) -> u64 {
        self.read_hits + self.write_hits
    }

    /// Interval misses, read and write combined.
    pub const fn misses(&self) -> u64 {
        self.read_misses + self.write_misses
    }

    /// Interval hit rate in percent (0 when there were no accesses).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits() + self.misses();
        if total == 0 {
            0.0
        } else {
            (self.hits() as f64 / total as f64) * 100.0
        }
    }
}

/// Statistics counters for the backing store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    /// Line reads since the last reset.
    pub reads: u64,
    /// Line writes since the last reset.
    pub writes: u64,
    /// Lifetime line reads (survives resets).
    pub total_reads: u64,
    /// Lifetime line writes (survives resets).
    pub total_writes: u64,
    /// Accrued simulated latency in cycles while the artificial-delay toggle
    /// was on (survives resets).
    pub total_cost: u64,
}

impl MemoryStats {
    /// Zeroes the interval tier; lifetime totals and cost are untouched.
    pub const fn reset_interval(&mut self) {
        self.reads = 0;
        self.writes = 0;
    }
}

/// One cache level's label and counters, as reported by a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStats {
    /// Level label, "L1" at the top.
    pub label: String,
    /// The level's counters at snapshot time.
    pub stats: CacheStats,
}

impl fmt::Display for LevelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        writeln!(
            f,
            "{} total read H/M {}/{}  total write H/M {}/{}",
            self.label,
            s.total_read_hits,
            s.total_read_misses,
            s.total_write_hits,
            s.total_write_misses
        )?;
        writeln!(
            f,
            "  reads {}, hits:misses {}:{}, evictions/cold fills {}/{}",
            s.reads, s.read_hits, s.read_misses, s.read_evictions, s.read_cold_fills
        )?;
        writeln!(
            f,
            "  writes {}, hits:misses {}:{}, evictions/cold fills {}/{}",
            s.writes, s.write_hits, s.write_misses, s.write_evictions, s.write_cold_fills
        )?;
        write!(
            f,
            "  hit rate {:.2}%  cost {} cycles",
            s.hit_rate(),
            s.total_cost
        )
    }
}

impl fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "RAM reads {} (lifetime {})  writes {} (lifetime {})",
            self.reads, self.total_reads, self.writes, self.total_writes
        )?;
        write!(f, "  cost {} cycles", self.total_cost)
    }
}
