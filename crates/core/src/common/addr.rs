//! Decoded address fields.
//!
//! A memory address is split by the cache geometry into three fields: the tag
//! identifying the block within its set, the index selecting the set, and the
//! byte offset within the block. The offset does not take part in lookup but is
//! kept for diagnostics.

/// Tag, set index and block offset of one memory address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodedAddress {
    /// Block identity within the selected set.
    pub tag: u64,
    /// Index of the set the address maps to.
    pub set_index: usize,
    /// Byte position within the block.
    pub offset: u64,
}

impl DecodedAddress {
    /// Creates a decoded address from its three fields.
    #[inline]
    pub const fn new(tag: u64, set_index: usize, offset: u64) -> Self {
        Self {
            tag,
            set_index,
            offset,
        }
    }
}
