//! Configuration system for the cache simulator.
//!
//! This module defines all construction-time parameters of a hierarchy. It
//! provides:
//! 1. **Defaults:** Baseline geometry and cost constants (a three-level
//!    hierarchy over a 1 MiB backing store).
//! 2. **Structures:** Per-level and backing-store configuration plus the root
//!    [`Config`].
//! 3. **Enums:** The six eviction policies.
//! 4. **Validation:** [`Config::validate`] rejects geometries the simulator
//!    cannot represent.
//!
//! Configuration is supplied as JSON (every field has a serde default, so a
//! partial document works) or via [`Config::default`].

use serde::{Deserialize, Serialize};

use crate::common::constants::LINE_BYTES;
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// Capacities and access costs follow the classic three-level teaching
/// configuration: small-and-fast L1 over larger-and-slower L2/L3 over RAM
/// with a two-orders-of-magnitude cost gap.
mod defaults {
    /// Default backing store size (1 MiB).
    pub const MEMORY_BYTES: usize = 1 << 20;

    /// Default backing store access cost in cycles.
    pub const MEMORY_ACCESS_COST: u64 = 110;

    /// Default L1 capacity in bytes (8 KiB).
    pub const L1_BYTES: usize = 8192;

    /// Default L2 capacity in bytes (16 KiB).
    pub const L2_BYTES: usize = 16384;

    /// Default L3 capacity in bytes (64 KiB).
    pub const L3_BYTES: usize = 65536;

    /// Default L1 access cost in cycles.
    pub const L1_ACCESS_COST: u64 = 4;

    /// Default L2 access cost in cycles.
    pub const L2_ACCESS_COST: u64 = 16;

    /// Default L3 access cost in cycles.
    pub const L3_ACCESS_COST: u64 = 48;

    /// Default associativity (4 ways per set).
    pub const CACHE_WAYS: usize = 4;
}

/// Eviction (victim selection) policy algorithms.
///
/// Selects which resident line to reclaim when a new line must be installed
/// in a full set. Chosen per level at construction time; cold fills always
/// take an invalid way first regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum EvictionPolicy {
    /// Uniform-random victim selection.
    ///
    /// No bookkeeping; ties are broken by the draw itself.
    Random,
    /// First In First Out (round-robin pointer per set).
    ///
    /// Evicts the line installed longest ago; hits are irrelevant.
    #[serde(alias = "FIFO")]
    Fifo,
    /// Bit pseudo-LRU (one marker bit per line).
    ///
    /// Evicts the first line whose marker is clear; clears all markers and
    /// restarts from way 0 once every line has been marked.
    #[serde(alias = "BitPLRU")]
    BitPlru,
    /// Tree pseudo-LRU (one bit per internal node of a binary tree).
    ///
    /// Requires a power-of-two way count.
    #[serde(alias = "TreePLRU")]
    TreePlru,
    /// History-compensated tree pseudo-LRU.
    ///
    /// Tree bits paired with parallel history bits; internal nodes only take
    /// a new direction once it agrees with the recorded history, which
    /// compensates for asymmetric access patterns that bias the plain tree.
    /// Requires a power-of-two way count.
    #[serde(alias = "HistoryPLRU")]
    HistoryPlru,
    /// Exact LRU via per-line age counters.
    ///
    /// Evicts the maximum age; ties break toward the lowest way index.
    #[default]
    #[serde(alias = "LRU")]
    Lru,
}

impl EvictionPolicy {
    /// Returns `true` for the tree-based policies, whose per-set node
    /// vectors only describe a balanced tree when `ways` is a power of two.
    pub const fn needs_power_of_two_ways(self) -> bool {
        matches!(self, Self::TreePlru | Self::HistoryPlru)
    }
}

/// Backing store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// Total size in bytes (must be a whole number of lines).
    #[serde(default = "MemoryConfig::default_size")]
    pub size_bytes: usize,

    /// Cost of one line access in cycles.
    #[serde(default = "MemoryConfig::default_access_cost")]
    pub access_cost: u64,

    /// Whether accesses accrue the simulated latency into the store's cost
    /// counter. Turned off to exclude unmeasured work (the driving
    /// application's rendering, for instance) from the counters.
    #[serde(default = "MemoryConfig::default_artificial_delay")]
    pub artificial_delay: bool,
}

impl MemoryConfig {
    fn default_size() -> usize {
        defaults::MEMORY_BYTES
    }

    fn default_access_cost() -> u64 {
        defaults::MEMORY_ACCESS_COST
    }

    const fn default_artificial_delay() -> bool {
        true
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_bytes: Self::default_size(),
            access_cost: Self::default_access_cost(),
            artificial_delay: Self::default_artificial_delay(),
        }
    }
}

/// Individual cache level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheLevelConfig {
    /// Total capacity in bytes.
    #[serde(default = "CacheLevelConfig::default_capacity")]
    pub capacity_bytes: usize,

    /// Associativity (lines per set).
    #[serde(default = "CacheLevelConfig::default_ways")]
    pub ways: usize,

    /// Cost of one hit at this level in cycles.
    #[serde(default = "CacheLevelConfig::default_access_cost")]
    pub access_cost: u64,

    /// Eviction policy for this level.
    #[serde(default)]
    pub policy: EvictionPolicy,
}

impl CacheLevelConfig {
    fn default_capacity() -> usize {
        defaults::L1_BYTES
    }

    fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    fn default_access_cost() -> u64 {
        defaults::L1_ACCESS_COST
    }

    /// Number of lines implied by the capacity.
    pub const fn num_lines(&self) -> usize {
        self.capacity_bytes / LINE_BYTES
    }

    /// Number of sets implied by capacity and associativity.
    pub const fn num_sets(&self) -> usize {
        self.num_lines() / self.ways
    }
}

impl Default for CacheLevelConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: Self::default_capacity(),
            ways: Self::default_ways(),
            access_cost: Self::default_access_cost(),
            policy: EvictionPolicy::default(),
        }
    }
}

/// Root configuration: line size, backing store, and the ordered cache
/// levels (top level first, so `levels[0]` is L1).
///
/// # Examples
///
/// Creating a default three-level configuration:
///
/// ```
/// use cachesim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.levels.len(), 3);
/// assert_eq!(config.levels[0].capacity_bytes, 8192);
/// config.validate().unwrap();
/// ```
///
/// Deserializing a partial JSON document:
///
/// ```
/// use cachesim_core::config::{Config, EvictionPolicy};
///
/// let json = r#"{
///     "memory": { "size_bytes": 65536, "access_cost": 110 },
///     "levels": [
///         { "capacity_bytes": 1024, "ways": 4, "access_cost": 4, "policy": "Fifo" }
///     ]
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.levels[0].policy, EvictionPolicy::Fifo);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Line size in bytes. Present for completeness of the construction
    /// surface; only the fixed 64-byte geometry is accepted.
    #[serde(default = "Config::default_line_bytes")]
    pub line_bytes: usize,

    /// Backing store parameters.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Cache levels, top first (`levels[0]` is L1, the level clients talk to).
    #[serde(default = "Config::default_levels")]
    pub levels: Vec<CacheLevelConfig>,
}

impl Config {
    const fn default_line_bytes() -> usize {
        LINE_BYTES
    }

    /// The classic three-level default: 8 KiB L1, 16 KiB L2, 64 KiB L3.
    fn default_levels() -> Vec<CacheLevelConfig> {
        vec![
            CacheLevelConfig {
                capacity_bytes: defaults::L1_BYTES,
                access_cost: defaults::L1_ACCESS_COST,
                ..CacheLevelConfig::default()
            },
            CacheLevelConfig {
                capacity_bytes: defaults::L2_BYTES,
                access_cost: defaults::L2_ACCESS_COST,
                ..CacheLevelConfig::default()
            },
            CacheLevelConfig {
                capacity_bytes: defaults::L3_BYTES,
                access_cost: defaults::L3_ACCESS_COST,
                ..CacheLevelConfig::default()
            },
        ]
    }

    /// Checks that this configuration describes a buildable hierarchy.
    ///
    /// # Errors
    ///
    /// Returns the first geometry violation found: wrong line size, an empty
    /// level list, a backing store that is not a whole number of lines, or a
    /// level whose capacity/associativity/policy combination is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_bytes != LINE_BYTES {
            return Err(ConfigError::UnsupportedLineSize(self.line_bytes));
        }
        if self.levels.is_empty() {
            return Err(ConfigError::EmptyHierarchy);
        }
        if self.memory.size_bytes == 0 || !self.memory.size_bytes.is_multiple_of(LINE_BYTES) {
            return Err(ConfigError::MemorySize(self.memory.size_bytes));
        }
        for (i, level) in self.levels.iter().enumerate() {
            let number = i + 1;
            if level.ways == 0 {
                return Err(ConfigError::ZeroWays { level: number });
            }
            if level.capacity_bytes == 0 || !level.capacity_bytes.is_multiple_of(LINE_BYTES) {
                return Err(ConfigError::LevelCapacity {
                    level: number,
                    capacity: level.capacity_bytes,
                });
            }
            let lines = level.num_lines();
            if !lines.is_multiple_of(level.ways) {
                return Err(ConfigError::WaysDoNotDivide {
                    level: number,
                    ways: level.ways,
                    lines,
                });
            }
            let sets = level.num_sets();
            if !sets.is_power_of_two() {
                return Err(ConfigError::SetCountNotPowerOfTwo {
                    level: number,
                    sets,
                });
            }
            if level.policy.needs_power_of_two_ways() && !level.ways.is_power_of_two() {
                return Err(ConfigError::PolicyNeedsPowerOfTwoWays {
                    level: number,
                    policy: level.policy,
                    ways: level.ways,
                });
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_bytes: Self::default_line_bytes(),
            memory: MemoryConfig::default(),
            levels: Self::default_levels(),
        }
    }
}
