//! Byte and Word Accessor Unit Tests.
//!
//! Verifies the 8/16/32-bit views over the line-granular path: values are
//! stored most-significant byte first, word and byte views agree, and
//! accesses straddling a line boundary fail fast.

use crate::common::{self, LINE};
use cachesim_core::config::EvictionPolicy;
use cachesim_core::Cache;

fn l1() -> Cache {
    common::level(EvictionPolicy::Lru, 1024, 4)
}

// ══════════════════════════════════════════════════════════
// 1. Byte round trips
// ══════════════════════════════════════════════════════════

#[test]
fn byte_round_trip() {
    let mut cache = l1();
    cache.write_byte(0, 0x5A);
    assert_eq!(cache.read_byte(0), 0x5A);
}

#[test]
fn byte_round_trip_at_line_edges() {
    let mut cache = l1();
    cache.write_byte(63, 0x01);
    cache.write_byte(64, 0x02);
    assert_eq!(cache.read_byte(63), 0x01);
    assert_eq!(cache.read_byte(64), 0x02);
}

// ══════════════════════════════════════════════════════════
// 2. Most-significant byte first
// ══════════════════════════════════════════════════════════

#[test]
fn u16_stores_high_byte_first() {
    let mut cache = l1();
    cache.write_u16(10, 0xBEEF);
    assert_eq!(cache.read_byte(10), 0xBE);
    assert_eq!(cache.read_byte(11), 0xEF);
    assert_eq!(cache.read_u16(10), 0xBEEF);
}

#[test]
fn u32_stores_high_byte_first() {
    let mut cache = l1();
    cache.write_u32(4, 0xDEAD_BEEF);
    assert_eq!(cache.read_byte(4), 0xDE);
    assert_eq!(cache.read_byte(5), 0xAD);
    assert_eq!(cache.read_byte(6), 0xBE);
    assert_eq!(cache.read_byte(7), 0xEF);
    assert_eq!(cache.read_u32(4), 0xDEAD_BEEF);
}

#[test]
fn bytes_compose_into_words() {
    let mut cache = l1();
    cache.write_byte(20, 0x12);
    cache.write_byte(21, 0x34);
    cache.write_byte(22, 0x56);
    cache.write_byte(23, 0x78);
    assert_eq!(cache.read_u16(20), 0x1234);
    assert_eq!(cache.read_u32(20), 0x1234_5678);
}

#[test]
fn u32_overwrites_u16_consistently() {
    let mut cache = l1();
    cache.write_u16(8, 0xFFFF);
    cache.write_u32(8, 0x0102_0304);
    assert_eq!(cache.read_u16(8), 0x0102);
    assert_eq!(cache.read_u16(10), 0x0304);
}

// ══════════════════════════════════════════════════════════
// 3. Accesses count once per word
// ══════════════════════════════════════════════════════════

#[test]
fn a_word_access_is_one_cache_access() {
    let mut cache = l1();
    cache.write_u32(0, 1);
    let _ = cache.read_u32(0);
    assert_eq!(cache.stats().writes, 1);
    assert_eq!(cache.stats().reads, 1);
}

// ══════════════════════════════════════════════════════════
// 4. Line-boundary violations
// ══════════════════════════════════════════════════════════

#[test]
#[should_panic]
fn u16_read_across_a_line_boundary_panics() {
    let mut cache = l1();
    let _ = cache.read_u16(LINE - 1);
}

#[test]
#[should_panic]
fn u32_write_across_a_line_boundary_panics() {
    let mut cache = l1();
    cache.write_u32(LINE - 2, 0xFFFF_FFFF);
}
