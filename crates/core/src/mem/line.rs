//! Cache line: the atomic unit of cached data.

use crate::common::constants::LINE_BYTES;

/// One cache line: tag, state flags, and a fixed 64-byte payload.
///
/// The tag is the full line-aligned address of the data, so lookups compare
/// it directly against the aligned probe address. The tag is only meaningful
/// while `valid` is set, and `dirty` implies `valid`: the only writer of
/// `dirty` is the owning level's write path, which operates on resident
/// (valid) lines exclusively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheLine {
    /// Line-aligned address of the cached data (meaningful only while valid).
    pub tag: u64,
    /// Whether this slot holds live data.
    pub valid: bool,
    /// Whether the payload has been written since it was last synchronized
    /// with the level below.
    pub dirty: bool,
    /// The cached bytes.
    pub data: [u8; LINE_BYTES],
}

impl CacheLine {
    /// Builds a valid, clean line holding `data` fetched for the line-aligned
    /// address `tag`.
    pub const fn fetched(tag: u64, data: [u8; LINE_BYTES]) -> Self {
        Self {
            tag,
            valid: true,
            dirty: false,
            data,
        }
    }
}

impl Default for CacheLine {
    /// An invalid, clean, zero-filled slot: the initial state of every way.
    fn default() -> Self {
        Self {
            tag: 0,
            valid: false,
            dirty: false,
            data: [0; LINE_BYTES],
        }
    }
}
