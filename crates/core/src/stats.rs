//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters of one simulation run. It provides:
//! 1. **Access mix:** Total accesses, reads, and writes.
//! 2. **Outcomes:** Hit and miss counts.
//! 3. **Memory traffic:** Bytes fetched on misses and bytes written back on evictions.
//! 4. **Resident dirty lines:** Lines that would still need flushing at the end of the run.
//!
//! The miss rate is derived only when a [`SimReport`] is built.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::sim::AccessKind;

/// Running counters for one simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of trace records processed.
    pub accesses: u64,
    /// Accesses that found the block resident.
    pub hits: u64,
    /// Accesses that had to fetch the block.
    pub misses: u64,
    /// Accesses labelled as reads.
    pub reads: u64,
    /// Accesses labelled as writes.
    pub writes: u64,
    /// Bytes fetched from memory (one block per miss).
    pub bytes_from_memory: u64,
    /// Bytes written back by evictions of dirty lines.
    pub bytes_written_back: u64,
    /// Dirty lines currently resident in the cache.
    pub resident_dirty_lines: u64,
}

impl SimStats {
    /// Counts one access of the given kind.
    pub const fn record_access(&mut self, kind: AccessKind) {
        self.accesses += 1;
        match kind {
            AccessKind::Read => self.reads += 1,
            AccessKind::Write => self.writes += 1,
            AccessKind::Other => {}
        }
    }

    /// Counts a hit.
    pub const fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Counts a miss and the block fetched for it.
    pub const fn record_miss(&mut self, line_bytes: u64) {
        self.misses += 1;
        self.bytes_from_memory += line_bytes;
    }

    /// Counts a line becoming dirty.
    pub const fn record_dirtied(&mut self) {
        self.resident_dirty_lines += 1;
    }

    /// Counts the write-back of an evicted dirty line.
    pub const fn record_write_back(&mut self, line_bytes: u64) {
        self.bytes_written_back += line_bytes;
        self.resident_dirty_lines = self.resident_dirty_lines.saturating_sub(1);
    }

    /// Builds the final report, charging every resident dirty line as flushed.
    ///
    /// # Arguments
    ///
    /// * `line_bytes` - Block size used for the end-of-run flush.
    pub const fn report(&self, line_bytes: u64) -> SimReport {
        SimReport {
            accesses: self.accesses,
            hits: self.hits,
            misses: self.misses,
            reads: self.reads,
            writes: self.writes,
            bytes_from_memory: self.bytes_from_memory,
            bytes_to_memory: self.bytes_written_back + line_bytes * self.resident_dirty_lines,
        }
    }
}

/// Final statistics of a run.
///
/// `bytes_to_memory` includes the end-of-run flush of lines still dirty.
/// Serializes with the derived `miss_rate` alongside the counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimReport {
    /// Number of trace records processed.
    pub accesses: u64,
    /// Hits.
    pub hits: u64,
    /// Misses.
    pub misses: u64,
    /// Reads.
    pub reads: u64,
    /// Writes.
    pub writes: u64,
    /// Bytes fetched from memory.
    pub bytes_from_memory: u64,
    /// Bytes written to memory by evictions and the final flush.
    pub bytes_to_memory: u64,
}

impl SimReport {
    /// Fraction of accesses that missed; `0.0` for an empty trace.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }
}

impl Serialize for SimReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SimReport", 8)?;
        s.serialize_field("accesses", &self.accesses)?;
        s.serialize_field("hits", &self.hits)?;
        s.serialize_field("misses", &self.misses)?;
        s.serialize_field("miss_rate", &self.miss_rate())?;
        s.serialize_field("reads", &self.reads)?;
        s.serialize_field("writes", &self.writes)?;
        s.serialize_field("bytes_from_memory", &self.bytes_from_memory)?;
        s.serialize_field("bytes_to_memory", &self.bytes_to_memory)?;
        s.end()
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Demand fetch: {}", self.accesses)?;
        writeln!(f, "Cache hit: {}", self.hits)?;
        writeln!(f, "Cache miss: {}", self.misses)?;
        writeln!(f, "Miss rate: {:.4}", self.miss_rate())?;
        writeln!(f, "Read data: {}", self.reads)?;
        writeln!(f, "Write data: {}", self.writes)?;
        writeln!(f, "Bytes from memory: {}", self.bytes_from_memory)?;
        write!(f, "Bytes to memory: {}", self.bytes_to_memory)
    }
}
