//! Access simulator.
//!
//! Drives a [`SetAssociativeCache`] with trace records and keeps the run's
//! [`SimStats`]. Records are processed strictly in order: each access,
//! including any eviction and counter update, completes before the next
//! record is decoded.

use super::TraceRecord;
use crate::cache::{AccessOutcome, SetAssociativeCache};
use crate::common::SimError;
use crate::config::CacheConfig;
use crate::stats::{SimReport, SimStats};

/// Owns one cache and its statistics for the duration of a run.
///
/// No state outlives the instance, so two simulators built from the same
/// configuration and fed the same trace produce identical reports.
#[derive(Debug)]
pub struct AccessSimulator {
    cache: SetAssociativeCache,
    stats: SimStats,
}

impl AccessSimulator {
    /// Builds a simulator with an empty cache.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`] if the geometry is rejected.
    pub fn new(config: &CacheConfig) -> Result<Self, SimError> {
        let cache = SetAssociativeCache::from_config(config)?;
        let g = cache.geometry();
        tracing::debug!(
            size = g.size_bytes(),
            line = g.line_bytes(),
            ways = g.ways(),
            sets = g.num_sets(),
            tag_bits = g.tag_bits(),
            index_bits = g.index_bits(),
            offset_bits = g.offset_bits(),
            policy = %config.policy,
            "cache built"
        );
        Ok(Self {
            cache,
            stats: SimStats::default(),
        })
    }

    /// Simulates one access and updates the statistics.
    pub fn access(&mut self, record: TraceRecord) -> AccessOutcome {
        let line_bytes = self.line_bytes();
        self.stats.record_access(record.kind);

        let decoded = self.cache.geometry().decode(record.address);
        let result = self
            .cache
            .access(decoded.set_index, decoded.tag, record.kind.is_write());

        match result.outcome {
            AccessOutcome::Hit => self.stats.record_hit(),
            AccessOutcome::Miss => self.stats.record_miss(line_bytes),
        }
        if result.wrote_back() {
            self.stats.record_write_back(line_bytes);
        }
        if result.dirtied {
            self.stats.record_dirtied();
        }
        result.outcome
    }

    /// Feeds every record to the cache and returns the final report.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error produced by `records`.
    pub fn run<I>(&mut self, records: I) -> Result<SimReport, SimError>
    where
        I: IntoIterator<Item = Result<TraceRecord, SimError>>,
    {
        for record in records {
            let _ = self.access(record?);
        }
        tracing::info!(
            accesses = self.stats.accesses,
            misses = self.stats.misses,
            "trace complete"
        );
        Ok(self.report())
    }

    /// Report for the accesses seen so far, with resident dirty lines charged as flushed.
    pub fn report(&self) -> SimReport {
        self.stats.report(self.line_bytes())
    }

    /// Running counters.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Simulated cache.
    pub const fn cache(&self) -> &SetAssociativeCache {
        &self.cache
    }

    const fn line_bytes(&self) -> u64 {
        self.cache.geometry().line_bytes() as u64
    }
}
