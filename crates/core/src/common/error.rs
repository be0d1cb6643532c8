//! Error types for hierarchy construction.
//!
//! Only configuration can fail recoverably: a cache cannot functionally fail
//! at runtime, it can only be slow. The two runtime contract violations
//! (a misaligned address passed to a line-granular operation, and a
//! multi-byte access crossing a line boundary) are caller bugs and abort via
//! `assert!`/index panic rather than surfacing here.

use thiserror::Error;

use crate::config::EvictionPolicy;

/// Reasons a [`crate::config::Config`] describes an unbuildable hierarchy.
///
/// Level numbers in messages are 1-based, counted from the top (L1).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration names no cache levels at all.
    #[error("hierarchy has no cache levels")]
    EmptyHierarchy,

    /// A line size other than the fixed 64 bytes was requested.
    #[error("unsupported line size {0} (lines are fixed at 64 bytes)")]
    UnsupportedLineSize(usize),

    /// The backing store size is zero or not a whole number of lines.
    #[error("backing store size {0} is not a whole positive number of lines")]
    MemorySize(usize),

    /// A level's associativity is zero.
    #[error("L{level}: way count must be non-zero")]
    ZeroWays {
        /// 1-based level number, top first.
        level: usize,
    },

    /// A level's capacity is zero or not a whole number of lines.
    #[error("L{level}: capacity {capacity} is not a whole positive number of lines")]
    LevelCapacity {
        /// 1-based level number, top first.
        level: usize,
        /// The offending capacity in bytes.
        capacity: usize,
    },

    /// A level's way count does not evenly divide its line count.
    #[error("L{level}: {ways} ways do not evenly divide {lines} lines")]
    WaysDoNotDivide {
        /// 1-based level number, top first.
        level: usize,
        /// Configured associativity.
        ways: usize,
        /// Number of lines implied by the capacity.
        lines: usize,
    },

    /// A level's set count came out as something other than a power of two.
    #[error("L{level}: set count {sets} is not a power of two")]
    SetCountNotPowerOfTwo {
        /// 1-based level number, top first.
        level: usize,
        /// Number of sets implied by capacity and ways.
        sets: usize,
    },

    /// A tree-based policy was paired with a non-power-of-two way count.
    #[error("L{level}: {policy:?} requires a power-of-two way count, got {ways}")]
    PolicyNeedsPowerOfTwoWays {
        /// 1-based level number, top first.
        level: usize,
        /// The tree-based policy that was requested.
        policy: EvictionPolicy,
        /// Configured associativity.
        ways: usize,
    },
}
