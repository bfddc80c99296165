//! Wire constants for the varint codec

/// Data bits carried per encoded byte
pub const VARINT_GROUP_BITS: u32 = 7;

/// Low seven bits of an encoded byte
pub const VARINT_DATA_MASK: u8 = 0x7F;

/// Continuation marker; clear only on the final byte
pub const VARINT_CONTINUATION: u8 = 0x80;

/// Longest encoding of a `u64` (ceil(64 / 7))
pub const MAX_VARINT_LEN: usize = 10;
