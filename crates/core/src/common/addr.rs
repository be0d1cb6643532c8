//! Address decomposition helpers.
//!
//! An address splits into three bit-fields: the byte offset within a line
//! (low `log2(LINE_BYTES)` bits), the set index (the next `log2(sets)` bits,
//! applied per level since set counts differ between levels), and the tag.
//! Levels store the full line-aligned address as the tag, so tag comparison
//! is a single equality check against [`line_base`] of the probed address.

use super::constants::{OFFSET_BITS, OFFSET_MASK};

/// Returns the line-aligned base address containing `addr`.
#[inline(always)]
pub const fn line_base(addr: u64) -> u64 {
    addr & !OFFSET_MASK
}

/// Returns the byte offset of `addr` within its line.
#[inline(always)]
pub const fn offset(addr: u64) -> usize {
    (addr & OFFSET_MASK) as usize
}

/// Returns `true` if `addr` is the first byte of a line.
#[inline(always)]
pub const fn is_line_aligned(addr: u64) -> bool {
    addr & OFFSET_MASK == 0
}

/// Returns the set index of `addr` for a level with `num_sets` sets.
///
/// `num_sets` must be a power of two (enforced at configuration time).
#[inline(always)]
pub const fn set_index(addr: u64, num_sets: usize) -> usize {
    ((addr >> OFFSET_BITS) as usize) & (num_sets - 1)
}
