//! Cache geometry and address decomposition.
//!
//! Derives the set count and field widths from a [`CacheConfig`] and splits
//! addresses into tag, set index and block offset:
//!
//! ```text
//!  address_width-1                                   0
//! +----------------+------------------+---------------+
//! |      tag       |    set index     |  block offset |
//! +----------------+------------------+---------------+
//!     tag_bits          index_bits        offset_bits
//! ```
//!
//! Both the block size and the set count must be powers of two; anything else
//! is rejected with a [`ConfigError`] instead of producing a wrong mask. Bits
//! at or above `address_width` are discarded before decoding.

use crate::common::{ConfigError, DecodedAddress};
use crate::config::CacheConfig;

/// Immutable geometry of a set-associative cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheGeometry {
    size_bytes: usize,
    line_bytes: usize,
    ways: usize,
    num_sets: usize,
    offset_bits: u32,
    index_bits: u32,
    tag_bits: u32,
    address_mask: u64,
}

impl CacheGeometry {
    /// Validates a configuration and derives its geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any size is zero, the block size or set
    /// count is not a power of two, the cache size is not a multiple of
    /// `line_bytes * ways`, or the fields do not fit the address width.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        if config.size_bytes == 0 {
            return Err(ConfigError::ZeroCacheSize);
        }
        if config.line_bytes == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if !config.line_bytes.is_power_of_two() {
            return Err(ConfigError::BlockSizeNotPowerOfTwo(config.line_bytes));
        }
        let ways = config.resolved_ways();
        if ways == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }
        if config.address_width > u64::BITS {
            return Err(ConfigError::AddressWidthTooLarge(config.address_width));
        }

        let indivisible = || ConfigError::IndivisibleGeometry {
            size_bytes: config.size_bytes,
            line_bytes: config.line_bytes,
            ways,
        };
        let set_bytes = config.line_bytes.checked_mul(ways).ok_or_else(indivisible)?;
        if set_bytes > config.size_bytes || !config.size_bytes.is_multiple_of(set_bytes) {
            return Err(indivisible());
        }

        let num_sets = config.size_bytes / set_bytes;
        if !num_sets.is_power_of_two() {
            return Err(ConfigError::SetCountNotPowerOfTwo(num_sets));
        }

        let offset_bits = config.line_bytes.trailing_zeros();
        let index_bits = num_sets.trailing_zeros();
        let tag_bits = config
            .address_width
            .checked_sub(offset_bits + index_bits)
            .ok_or(ConfigError::AddressWidthTooSmall {
                width: config.address_width,
                offset_bits,
                index_bits,
            })?;
        let address_mask = u64::MAX
            .checked_shr(u64::BITS - config.address_width)
            .unwrap_or(0);

        Ok(Self {
            size_bytes: config.size_bytes,
            line_bytes: config.line_bytes,
            ways,
            num_sets,
            offset_bits,
            index_bits,
            tag_bits,
            address_mask,
        })
    }

    /// Splits an address into tag, set index and block offset.
    ///
    /// Pure; defined for every `u64`. Bits above the address width are
    /// ignored, so `addr` and `addr & address_mask()` decode identically.
    #[inline]
    pub fn decode(&self, addr: u64) -> DecodedAddress {
        let addr = addr & self.address_mask;
        let set_index = (addr >> self.offset_bits) & (self.num_sets as u64 - 1);
        let tag = addr
            .checked_shr(self.index_bits + self.offset_bits)
            .unwrap_or(0);
        let offset = addr & (self.line_bytes as u64 - 1);
        DecodedAddress::new(tag, set_index as usize, offset)
    }

    /// Total cache size in bytes.
    pub const fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Block size in bytes.
    pub const fn line_bytes(&self) -> usize {
        self.line_bytes
    }

    /// Lines per set.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Number of sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Width of the block offset field.
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Width of the set index field.
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Width of the tag field.
    pub const fn tag_bits(&self) -> u32 {
        self.tag_bits
    }

    /// Mask of the bits below the address width.
    pub const fn address_mask(&self) -> u64 {
        self.address_mask
    }
}
