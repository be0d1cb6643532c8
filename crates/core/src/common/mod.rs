//! Common utilities and types shared across the cache simulator.
//!
//! This module provides the building blocks every storage level relies on:
//! 1. **Address Helpers:** Line-alignment and offset/set-index decomposition.
//! 2. **Constants:** The fixed line geometry (64-byte lines).
//! 3. **Error Handling:** Configuration validation errors.

/// Address decomposition helpers (line base, offset, set index).
pub mod addr;

/// Fixed line-geometry constants.
pub mod constants;

/// Configuration error types.
pub mod error;

pub use addr::{is_line_aligned, line_base, offset, set_index};
pub use constants::{LINE_BYTES, OFFSET_BITS, OFFSET_MASK};
pub use error::ConfigError;
