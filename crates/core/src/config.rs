//! Configuration for the cache simulator.
//!
//! This module defines the configuration consumed by the cache model. It provides:
//! 1. **Defaults:** Baseline geometry (4 KiB, 64-byte lines, direct-mapped, LRU, 32-bit addresses).
//! 2. **Structures:** `CacheConfig`, deserializable from JSON or built from CLI units.
//! 3. **Enums:** Associativity (fixed ways or fully associative) and replacement policy.
//!
//! Values are not validated here; `CacheGeometry::new` rejects geometries that
//! cannot be decomposed with bit masks.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default cache size in bytes (4 KiB).
    pub const CACHE_SIZE: usize = 4096;

    /// Default cache line size in bytes (64 bytes).
    pub const CACHE_LINE: usize = 64;

    /// Default associativity (1 way = direct-mapped).
    pub const CACHE_WAYS: usize = 1;

    /// Width of a trace address in bits.
    pub const ADDRESS_WIDTH: u32 = 32;
}

/// Cache replacement policy algorithms.
///
/// Both policies evict the head of the per-set occupancy queue. They differ
/// only in whether a hit moves the line to the tail of that queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Hits refresh the line's position in the queue.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// First In First Out replacement policy.
    ///
    /// Queue order is fixed when a line is installed.
    #[serde(alias = "Fifo")]
    Fifo,
}

impl ReplacementPolicy {
    /// Selects a policy by name.
    ///
    /// Exactly `"LRU"` selects LRU; every other name selects FIFO.
    pub fn from_name(name: &str) -> Self {
        if name == "LRU" { Self::Lru } else { Self::Fifo }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lru => write!(f, "LRU"),
            Self::Fifo => write!(f, "FIFO"),
        }
    }
}

/// Number of lines per set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "AssociativityRepr")]
pub enum Associativity {
    /// Fixed number of ways.
    Ways(usize),
    /// A single set holding every line of the cache.
    Full,
}

impl Default for Associativity {
    fn default() -> Self {
        Self::Ways(defaults::CACHE_WAYS)
    }
}

impl FromStr for Associativity {
    type Err = ConfigError;

    /// Parses a way count, or any text starting with `f` as fully associative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('f') {
            return Ok(Self::Full);
        }
        s.parse::<usize>()
            .map(Self::Ways)
            .map_err(|_| ConfigError::InvalidAssociativity(s.to_string()))
    }
}

impl fmt::Display for Associativity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ways(n) => write!(f, "{n}-way"),
            Self::Full => write!(f, "fully associative"),
        }
    }
}

/// JSON form of [`Associativity`]: a way count or a name such as `"full"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum AssociativityRepr {
    Ways(usize),
    Name(String),
}

impl TryFrom<AssociativityRepr> for Associativity {
    type Error = ConfigError;

    fn try_from(repr: AssociativityRepr) -> Result<Self, Self::Error> {
        match repr {
            AssociativityRepr::Ways(n) => Ok(Self::Ways(n)),
            AssociativityRepr::Name(name) => name.parse(),
        }
    }
}

/// Configuration for a single simulated cache.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use cachesim_core::config::{Associativity, CacheConfig, ReplacementPolicy};
///
/// let config = CacheConfig::default();
/// assert_eq!(config.size_bytes, 4096);
/// assert_eq!(config.ways, Associativity::Ways(1));
/// assert_eq!(config.policy, ReplacementPolicy::Lru);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use cachesim_core::config::{Associativity, CacheConfig, ReplacementPolicy};
///
/// let json = r#"{
///     "size_bytes": 32768,
///     "line_bytes": 32,
///     "ways": "full",
///     "policy": "Fifo"
/// }"#;
///
/// let config: CacheConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.ways, Associativity::Full);
/// assert_eq!(config.resolved_ways(), 1024);
/// assert_eq!(config.policy, ReplacementPolicy::Fifo);
/// assert_eq!(config.address_width, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Total size in bytes
    #[serde(default = "CacheConfig::default_size")]
    pub size_bytes: usize,

    /// Block (line) size in bytes
    #[serde(default = "CacheConfig::default_line")]
    pub line_bytes: usize,

    /// Lines per set
    #[serde(default)]
    pub ways: Associativity,

    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// Address width in bits used to size the tag field
    #[serde(default = "CacheConfig::default_address_width")]
    pub address_width: u32,
}

impl CacheConfig {
    /// Builds a configuration from a size in KiB, as given on the command line.
    ///
    /// # Arguments
    ///
    /// * `size_kib` - Total cache size in kilobytes.
    /// * `line_bytes` - Block size in bytes.
    /// * `ways` - Associativity.
    /// * `policy` - Replacement policy.
    pub const fn from_kib(
        size_kib: usize,
        line_bytes: usize,
        ways: Associativity,
        policy: ReplacementPolicy,
    ) -> Self {
        Self {
            size_bytes: size_kib.saturating_mul(1024),
            line_bytes,
            ways,
            policy,
            address_width: defaults::ADDRESS_WIDTH,
        }
    }

    /// Returns the number of ways, resolving `Full` to the total line count.
    pub fn resolved_ways(&self) -> usize {
        match self.ways {
            Associativity::Ways(n) => n,
            Associativity::Full => self.size_bytes.checked_div(self.line_bytes).unwrap_or(0),
        }
    }

    const fn default_size() -> usize {
        defaults::CACHE_SIZE
    }

    const fn default_line() -> usize {
        defaults::CACHE_LINE
    }

    const fn default_address_width() -> u32 {
        defaults::ADDRESS_WIDTH
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::CACHE_SIZE,
            line_bytes: defaults::CACHE_LINE,
            ways: Associativity::default(),
            policy: ReplacementPolicy::default(),
            address_width: defaults::ADDRESS_WIDTH,
        }
    }
}
