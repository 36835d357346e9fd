//! Trace-driven simulation.
//!
//! This module connects a trace source to the cache model. It provides:
//! 1. **Records:** The `(kind, address)` pairs the simulator consumes.
//! 2. **Trace Reader:** Parsing of whitespace-separated `label address` text.
//! 3. **Simulator:** Per-record decoding, cache access, and statistics updates.

/// Access simulator driving the cache and statistics.
pub mod simulator;

/// Text trace reader.
pub mod trace;

pub use simulator::AccessSimulator;
pub use trace::TraceReader;

/// Classification of a trace record by its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// Label `0`.
    Read,
    /// Label `1`.
    Write,
    /// Any other label: simulated as a non-write access, counted as neither read nor write.
    Other,
}

impl AccessKind {
    /// Classifies a trace label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "0" => Self::Read,
            "1" => Self::Write,
            _ => Self::Other,
        }
    }

    /// Returns `true` only for writes.
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

/// One memory access from a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraceRecord {
    /// Read, write, or unlabelled access.
    pub kind: AccessKind,
    /// Accessed byte address.
    pub address: u64,
}

impl TraceRecord {
    /// Creates a record.
    pub const fn new(kind: AccessKind, address: u64) -> Self {
        Self { kind, address }
    }

    /// Creates a read record.
    pub const fn read(address: u64) -> Self {
        Self::new(AccessKind::Read, address)
    }

    /// Creates a write record.
    pub const fn write(address: u64) -> Self {
        Self::new(AccessKind::Write, address)
    }
}
