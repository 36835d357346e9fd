//! Trace-driven set-associative cache simulator library.
//!
//! This crate models a single write-back, write-allocate cache against a
//! sequence of memory accesses and reports hit/miss and memory-traffic
//! statistics. It is organised as follows:
//! 1. **Common:** Error types and the tag/index/offset decomposition result.
//! 2. **Config:** Cache configuration (size, line size, associativity, policy).
//! 3. **Cache:** Geometry derivation, line storage, and replacement policies.
//! 4. **Simulation:** The access simulator and the text trace reader.
//! 5. **Stats:** Running counters and the final report.

/// Common types (errors, decoded addresses).
pub mod common;
/// Cache configuration (defaults, associativity, replacement policy selection).
pub mod config;
/// Set-associative cache model (geometry, sets, lines, replacement policies).
pub mod cache;
/// Access simulator and trace reader.
pub mod sim;
/// Simulation statistics and reporting.
pub mod stats;

/// Root configuration type; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// Main simulator type; owns the cache and its statistics for one run.
pub use crate::sim::AccessSimulator;
/// Final statistics snapshot produced at the end of a run.
pub use crate::stats::SimReport;
