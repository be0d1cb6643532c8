//! Eviction Policy Unit Tests.
//!
//! Drives each policy directly through the [`ReplacementPolicy`] trait,
//! without a cache in front, so victim choices can be asserted exactly.

use rstest::rstest;

use cachesim_core::cache::policies::{
    BitPlruPolicy, FifoPolicy, HistoryPlruPolicy, LruPolicy, RandomPolicy, ReplacementPolicy,
    TreePlruPolicy,
};

// ══════════════════════════════════════════════════════════
// 1. Random
// ══════════════════════════════════════════════════════════

#[test]
fn random_victims_stay_in_range() {
    let mut policy = RandomPolicy::new(1, 4);
    for _ in 0..1000 {
        assert!(policy.victim(0) < 4);
    }
}

#[test]
fn random_is_deterministic_across_instances() {
    // Fixed seed: two fresh instances draw the same sequence.
    let mut a = RandomPolicy::new(1, 8);
    let mut b = RandomPolicy::new(1, 8);
    for _ in 0..100 {
        assert_eq!(a.victim(0), b.victim(0));
    }
}

#[test]
fn random_ignores_touches() {
    let mut touched = RandomPolicy::new(1, 4);
    let mut untouched = RandomPolicy::new(1, 4);
    touched.touch(0, 2);
    touched.install(0, 3);
    assert_eq!(touched.victim(0), untouched.victim(0));
}

// ══════════════════════════════════════════════════════════
// 2. FIFO
// ══════════════════════════════════════════════════════════

#[test]
fn fifo_rotates_round_robin() {
    let mut policy = FifoPolicy::new(1, 4);
    assert_eq!(policy.victim(0), 0);
    assert_eq!(policy.victim(0), 1);
    assert_eq!(policy.victim(0), 2);
    assert_eq!(policy.victim(0), 3);
    assert_eq!(policy.victim(0), 0); // wraps
}

#[test]
fn fifo_hits_do_not_advance_the_pointer() {
    let mut policy = FifoPolicy::new(1, 4);
    policy.touch(0, 1);
    policy.touch(0, 2);
    policy.touch(0, 2);
    assert_eq!(policy.victim(0), 0);
}

#[test]
fn fifo_pointers_are_per_set() {
    let mut policy = FifoPolicy::new(2, 4);
    assert_eq!(policy.victim(0), 0);
    assert_eq!(policy.victim(0), 1);
    // Set 1 has its own pointer, still at 0.
    assert_eq!(policy.victim(1), 0);
}

// ══════════════════════════════════════════════════════════
// 3. Bit PLRU
// ══════════════════════════════════════════════════════════

#[test]
fn bit_plru_picks_first_unmarked() {
    let mut policy = BitPlruPolicy::new(1, 4);
    policy.touch(0, 0);
    policy.touch(0, 1);
    assert_eq!(policy.victim(0), 2);
}

#[test]
fn bit_plru_saturation_clears_and_restarts() {
    let mut policy = BitPlruPolicy::new(1, 4);
    for w in 0..4 {
        policy.touch(0, w);
    }
    // All marked: clear everything, reclaim way 0.
    assert_eq!(policy.victim(0), 0);
    // Markers are now clear; installing into way 0 re-marks it only.
    policy.install(0, 0);
    assert_eq!(policy.victim(0), 1);
}

#[test]
fn bit_plru_installs_protect_fresh_lines() {
    let mut policy = BitPlruPolicy::new(1, 2);
    policy.install(0, 0);
    assert_eq!(policy.victim(0), 1);
}

// ══════════════════════════════════════════════════════════
// 4. Tree PLRU
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
fn tree_plru_never_evicts_the_last_touched_way(#[case] way: usize) {
    let mut policy = TreePlruPolicy::new(1, 4);
    policy.touch(0, way);
    assert_ne!(policy.victim(0), way);
}

#[test]
fn tree_plru_two_ways_alternate() {
    let mut policy = TreePlruPolicy::new(1, 2);
    // Fresh node bit is clear (left); the walk flips it in passing.
    assert_eq!(policy.victim(0), 0);
    assert_eq!(policy.victim(0), 1);
    assert_eq!(policy.victim(0), 0);
}

#[test]
fn tree_plru_touch_steers_the_walk_away() {
    let mut policy = TreePlruPolicy::new(1, 4);
    // Touching way 0 sets the root right and the left leaf node right;
    // the walk lands in the untouched right subtree.
    policy.touch(0, 0);
    assert_eq!(policy.victim(0), 2);
}

#[test]
fn tree_plru_single_way_degenerates() {
    let mut policy = TreePlruPolicy::new(1, 1);
    policy.touch(0, 0);
    assert_eq!(policy.victim(0), 0);
}

#[test]
#[should_panic(expected = "power-of-two")]
fn tree_plru_rejects_three_ways() {
    let _ = TreePlruPolicy::new(1, 3);
}

// ══════════════════════════════════════════════════════════
// 5. History-compensated tree PLRU
// ══════════════════════════════════════════════════════════

#[test]
fn history_plru_fresh_state_reclaims_way_zero() {
    let mut policy = HistoryPlruPolicy::new(1, 4);
    assert_eq!(policy.victim(0), 0);
}

#[test]
fn history_plru_damps_a_single_touch() {
    let mut policy = HistoryPlruPolicy::new(1, 4);
    // One touch of way 0 protects its leaf pair but does not yet swing
    // the root: the victim stays in the left subtree.
    policy.touch(0, 0);
    assert_eq!(policy.victim(0), 1);
}

#[test]
fn history_plru_two_agreeing_touches_swing_the_root() {
    let mut policy = HistoryPlruPolicy::new(1, 4);
    // The second touch of way 0 confirms the recorded direction, so the
    // root now steers the walk into the right subtree.
    policy.touch(0, 0);
    policy.touch(0, 0);
    assert_eq!(policy.victim(0), 2);
}

#[test]
fn history_plru_single_way_degenerates() {
    let mut policy = HistoryPlruPolicy::new(1, 1);
    policy.touch(0, 0);
    assert_eq!(policy.victim(0), 0);
}

#[test]
#[should_panic(expected = "power-of-two")]
fn history_plru_rejects_six_ways() {
    let _ = HistoryPlruPolicy::new(1, 6);
}

// ══════════════════════════════════════════════════════════
// 6. Exact LRU
// ══════════════════════════════════════════════════════════

#[test]
fn lru_evicts_the_least_recently_used() {
    let mut policy = LruPolicy::new(1, 3);
    policy.install(0, 0);
    policy.install(0, 1);
    policy.install(0, 2);
    // Refreshing way 0 makes way 1 the oldest.
    policy.touch(0, 0);
    assert_eq!(policy.victim(0), 1);
}

#[test]
fn lru_ties_break_toward_the_lowest_way() {
    // No accesses at all: every age is zero, way 0 wins the tie.
    let mut policy = LruPolicy::new(1, 4);
    assert_eq!(policy.victim(0), 0);
}

#[test]
fn lru_tracks_full_recency_order() {
    let mut policy = LruPolicy::new(1, 4);
    for w in 0..4 {
        policy.install(0, w);
    }
    policy.touch(0, 2);
    policy.touch(0, 0);
    policy.touch(0, 3);
    // Way 1 has not been touched since installation.
    assert_eq!(policy.victim(0), 1);
}

#[test]
fn lru_state_is_per_set() {
    let mut policy = LruPolicy::new(2, 2);
    policy.install(0, 0);
    policy.install(0, 1);
    policy.touch(0, 0);
    // Set 0: way 1 is oldest. Set 1 is untouched, way 0 wins its tie.
    assert_eq!(policy.victim(0), 1);
    assert_eq!(policy.victim(1), 0);
}
