//! Storage primitives: lines, the level-composition trait, and the backing
//! store.
//!
//! 1. **Line:** [`CacheLine`], the atomic unit moved between levels.
//! 2. **Trait:** [`Storage`], the line-granular contract every level
//!    implements and consumes from the level below it.
//! 3. **RAM:** [`MainMemory`], the simulated slow flat store at the bottom.

/// Cache line definition.
pub mod line;

/// Simulated slow RAM backing store.
pub mod ram;

/// The `Storage` composition trait.
pub mod traits;

pub use line::CacheLine;
pub use ram::MainMemory;
pub use traits::Storage;
