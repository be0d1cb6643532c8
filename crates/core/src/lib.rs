//! Hierarchical set-associative cache simulator library.
//!
//! This crate implements a chain of N-way set-associative cache levels over
//! a simulated slow backing store, with the following:
//! 1. **Storage:** Cache lines, the line-granular `Storage` composition
//!    trait, and the flat backing store.
//! 2. **Cache:** The set-associative level with write-allocate/write-back
//!    semantics and byte/16/32-bit accessors.
//! 3. **Policies:** Six interchangeable victim-selection policies (Random,
//!    FIFO, bit PLRU, tree PLRU, history-compensated tree PLRU, exact LRU).
//! 4. **Hierarchy:** Config-driven construction of the level chain and the
//!    per-level telemetry surface.
//! 5. **Statistics:** Two-tier (interval + lifetime) counters with cost
//!    accounting in abstract cycles.
//!
//! The simulator is functional, not timing-accurate: a cache never fails,
//! it can only be slow.

/// Set-associative cache level and eviction policies.
pub mod cache;
/// Common types and constants (addresses, line geometry, errors).
pub mod common;
/// Simulator configuration (defaults, policies, hierarchical structures).
pub mod config;
/// Hierarchy construction and the client-facing access surface.
pub mod hierarchy;
/// Storage primitives (lines, the composition trait, the backing store).
pub mod mem;
/// Statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Single cache level; compose manually or via `CacheHierarchy`.
pub use crate::cache::Cache;
/// Top-level owned chain of cache levels over the backing store.
pub use crate::hierarchy::CacheHierarchy;
/// The atomic unit of cached data.
pub use crate::mem::line::CacheLine;
/// Simulated slow RAM backing store.
pub use crate::mem::ram::MainMemory;
/// Line-granular contract implemented by every level.
pub use crate::mem::traits::Storage;
