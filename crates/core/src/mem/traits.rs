//! Storage trait implemented by every level of the hierarchy.
//!
//! Both the backing store and each cache level speak the same line-granular
//! read/write contract, so levels compose transparently: a cache owns a boxed
//! `Storage` for the level below it, which is either another cache or the
//! backing store. The downcast hooks let a hierarchy walk its chain for
//! telemetry without knowing its depth.

use crate::cache::Cache;
use crate::mem::line::CacheLine;
use crate::mem::ram::MainMemory;

/// Line-granular storage: the composition interface between levels.
///
/// Implementors must treat a non-line-aligned address as a caller bug and
/// fail fast; there is no recoverable error surface on the access path.
pub trait Storage: Send + Sync {
    /// Reads the line at the line-aligned address `addr`.
    ///
    /// `is_write` marks the access as part of a write for statistics
    /// purposes only; the returned data is identical either way.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is not line-aligned (contract violation).
    fn read_line(&mut self, addr: u64, is_write: bool) -> CacheLine;

    /// Writes a full line at the line-aligned address `addr`.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is not line-aligned (contract violation).
    fn write_line(&mut self, addr: u64, line: &CacheLine);

    /// Zeroes this level's interval statistics counters.
    ///
    /// Cumulative (lifetime) counters and the running cost are unaffected.
    fn reset_stats(&mut self);

    /// Returns this level as a [`Cache`] if it is one.
    fn as_cache(&self) -> Option<&Cache> {
        None
    }

    /// Returns this level as a mutable [`Cache`] if it is one.
    fn as_cache_mut(&mut self) -> Option<&mut Cache> {
        None
    }

    /// Returns this level as the backing [`MainMemory`] if it is one.
    fn as_memory(&self) -> Option<&MainMemory> {
        None
    }

    /// Returns this level as the mutable backing [`MainMemory`] if it is one.
    fn as_memory_mut(&mut self) -> Option<&mut MainMemory> {
        None
    }
}
