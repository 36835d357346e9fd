//! Error definitions for the cache simulator.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Configuration Errors:** Geometry values that cannot be decomposed with bit masks.
//! 2. **Trace Errors:** I/O failures and records that cannot be decoded.
//! 3. **Simulation Errors:** A single top-level type wrapping both, used with `?`.
//!
//! Simulation itself is infallible once the cache is built; every error is fatal
//! to the run that produced it.

use std::io;

use thiserror::Error;

/// Rejected cache geometry.
///
/// The set index and tag are extracted with shifts and masks, so the block
/// size and the set count must both be powers of two and the fields must fit
/// in the configured address width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Total cache size is zero.
    #[error("cache size must be positive")]
    ZeroCacheSize,

    /// Block (line) size is zero.
    #[error("block size must be positive")]
    ZeroBlockSize,

    /// Associativity is zero.
    #[error("associativity must be positive")]
    ZeroAssociativity,

    /// Block size is not a power of two.
    #[error("block size {0} is not a power of two")]
    BlockSizeNotPowerOfTwo(usize),

    /// Cache size is not an exact multiple of one set's capacity.
    #[error(
        "cache size {size_bytes} is not divisible by block size {line_bytes} x associativity {ways}"
    )]
    IndivisibleGeometry {
        /// Total cache size in bytes.
        size_bytes: usize,
        /// Block size in bytes.
        line_bytes: usize,
        /// Lines per set.
        ways: usize,
    },

    /// Derived set count is not a power of two.
    #[error("set count {0} is not a power of two")]
    SetCountNotPowerOfTwo(usize),

    /// Offset and index bits do not fit in the address width.
    #[error(
        "address width {width} bits cannot hold {offset_bits} offset bits and {index_bits} index bits"
    )]
    AddressWidthTooSmall {
        /// Configured address width.
        width: u32,
        /// Bits consumed by the block offset.
        offset_bits: u32,
        /// Bits consumed by the set index.
        index_bits: u32,
    },

    /// Address width exceeds the 64-bit address type.
    #[error("address width {0} exceeds 64 bits")]
    AddressWidthTooLarge(u32),

    /// Associativity text is neither a positive integer nor a fully-associative marker.
    #[error("invalid associativity '{0}'")]
    InvalidAssociativity(String),
}

/// Failure while reading trace records.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Underlying source could not be read.
    #[error("failed to read trace: {0}")]
    Io(#[from] io::Error),

    /// A label/address pair could not be decoded.
    #[error("malformed trace record #{record}: '{text}' ({reason})")]
    MalformedTraceRecord {
        /// 1-based position of the record in the trace.
        record: u64,
        /// Offending text.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Top-level error returned by simulator construction and trace-driven runs.
#[derive(Debug, Error)]
pub enum SimError {
    /// Cache configuration was rejected.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Trace source failed or produced an undecodable record.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
