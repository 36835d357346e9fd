//! Shared helpers for building caches and running short traces.

use cachesim_core::config::{Associativity, CacheConfig, ReplacementPolicy};
use cachesim_core::sim::TraceRecord;
use cachesim_core::{AccessSimulator, SimReport};

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("cachesim_core=debug")
        .try_init();
}

/// Builds a configuration from bytes, ways and policy with a 32-bit address.
pub fn config(size_bytes: usize, line_bytes: usize, ways: usize, policy: ReplacementPolicy) -> CacheConfig {
    CacheConfig {
        size_bytes,
        line_bytes,
        ways: Associativity::Ways(ways),
        policy,
        address_width: 32,
    }
}

/// Runs `records` through a fresh simulator and returns the final report.
pub fn run(config: &CacheConfig, records: &[TraceRecord]) -> SimReport {
    init_tracing();
    let mut sim = match AccessSimulator::new(config) {
        Ok(sim) => sim,
        Err(e) => panic!("test configuration rejected: {e}"),
    };
    match sim.run(records.iter().copied().map(Ok)) {
        Ok(report) => report,
        Err(e) => panic!("in-memory trace failed: {e}"),
    }
}

/// Builds a simulator, panicking on a rejected configuration.
pub fn simulator(config: &CacheConfig) -> AccessSimulator {
    init_tracing();
    match AccessSimulator::new(config) {
        Ok(sim) => sim,
        Err(e) => panic!("test configuration rejected: {e}"),
    }
}
