//! Eviction (victim selection) policies.
//!
//! Each policy answers one question for a full set: which way to reclaim
//! next. Cold fills never reach a policy — the owning cache installs into an
//! invalid way first, regardless of policy — so implementations only see
//! three events: a hit (`touch`), a completed installation (`install`), and
//! a victim request for a set with no invalid ways (`victim`).
//!
//! # Policies
//!
//! - `Random`: uniform draw, no state.
//! - `Fifo`: rotating pointer per set.
//! - `BitPlru`: one marker bit per line.
//! - `TreePlru`: one bit per internal node of a balanced binary tree.
//! - `HistoryPlru`: tree bits plus parallel history bits.
//! - `Lru`: exact, via per-line age counters.

/// Bit pseudo-LRU policy.
pub mod bit_plru;

/// First-In, First-Out policy.
pub mod fifo;

/// History-compensated tree pseudo-LRU policy.
pub mod history_plru;

/// Exact LRU policy (per-line age counters).
pub mod lru;

/// Random policy.
pub mod random;

/// Tree pseudo-LRU policy.
pub mod tree_plru;

pub use bit_plru::BitPlruPolicy;
pub use fifo::FifoPolicy;
pub use history_plru::HistoryPlruPolicy;
pub use lru::LruPolicy;
pub use random::RandomPolicy;
pub use tree_plru::TreePlruPolicy;

/// Trait for victim-selection policies.
///
/// All methods take a set index; state is scoped per set. `way` indices are
/// in `[0, ways)`.
pub trait ReplacementPolicy: Send + Sync {
    /// Notifies the policy that `way` hit (recency update, policy-specific).
    fn touch(&mut self, set: usize, way: usize);

    /// Notifies the policy that a line was just installed into `way`
    /// (after a cold fill or an eviction).
    fn install(&mut self, set: usize, way: usize);

    /// Selects the way to reclaim in a set with no invalid ways.
    fn victim(&mut self, set: usize) -> usize;
}
