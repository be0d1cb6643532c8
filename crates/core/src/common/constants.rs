//! Common constants used throughout the cache simulator.
//!
//! Line geometry is fixed for the whole hierarchy: every storage level moves
//! data in 64-byte lines, so the offset field of an address is always the low
//! six bits. Capacities, way counts, and access costs are per-level
//! configuration (see [`crate::config`]).

/// Size of a cache line in bytes.
///
/// Fixed for the whole hierarchy; payloads are `[u8; LINE_BYTES]` arrays and
/// the backing store is sized in whole lines.
pub const LINE_BYTES: usize = 64;

/// Number of low address bits holding the byte offset within a line.
///
/// `log2(LINE_BYTES)`.
pub const OFFSET_BITS: u32 = LINE_BYTES.trailing_zeros();

/// Mask selecting the byte-offset bits of an address.
pub const OFFSET_MASK: u64 = (LINE_BYTES as u64) - 1;
