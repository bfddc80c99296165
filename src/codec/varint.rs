use tracing::debug;

use crate::codec::constants::{
    MAX_VARINT_LEN, VARINT_CONTINUATION, VARINT_DATA_MASK, VARINT_GROUP_BITS,
};
use crate::codec::error::{CodecError, Result};

/// Encode u64 into varint (LEB128-style), least-significant group first.
///
/// Every byte except the last carries the continuation bit. Zero encodes
/// to the single byte `0x00`.
pub fn encode_varint_unsigned_into(mut value: u64, out: &mut Vec<u8>) {
    while value >= VARINT_CONTINUATION as u64 {
        out.push((value as u8 & VARINT_DATA_MASK) | VARINT_CONTINUATION);
        value >>= VARINT_GROUP_BITS;
    }
    out.push(value as u8);
}

pub fn encode_varint_unsigned(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(varint_len_unsigned(value));
    encode_varint_unsigned_into(value, &mut out);
    out
}

/// Encode i64 through the zig-zag mapping.
///
/// Non-negative values encode exactly as `encode_varint_unsigned(value * 2)`.
pub fn encode_varint_signed_into(value: i64, out: &mut Vec<u8>) {
    encode_varint_unsigned_into(zigzag_encode(value), out);
}

pub fn encode_varint_signed(value: i64) -> Vec<u8> {
    encode_varint_unsigned(zigzag_encode(value))
}

/// Number of bytes `encode_varint_unsigned` produces for `value`
pub fn varint_len_unsigned(value: u64) -> usize {
    if value == 0 {
        return 1;
    }
    let bits = u64::BITS - value.leading_zeros();
    bits.div_ceil(VARINT_GROUP_BITS) as usize
}

/// Decode varint from bytes, returning (value, bytes_consumed).
///
/// Rejects input that the encoder could never have produced: a missing
/// terminal byte, more than ten bytes, bits beyond 64, or a trailing
/// zero group.
pub fn decode_varint_unsigned(buf: &[u8]) -> Result<(u64, usize)> {
    let mut result = 0u64;
    let mut shift = 0u32;

    for (i, &byte) in buf.iter().enumerate() {
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            debug!("varint exceeds 64 bits at byte {}", i);
            return Err(CodecError::Overflow);
        }

        result |= ((byte & VARINT_DATA_MASK) as u64) << shift;

        if byte & VARINT_CONTINUATION == 0 {
            if i > 0 && byte == 0 {
                debug!("non-minimal varint of {} bytes", i + 1);
                return Err(CodecError::NonMinimal);
            }
            return Ok((result, i + 1));
        }

        shift += VARINT_GROUP_BITS;
    }

    debug!("varint truncated after {} bytes", buf.len());
    Err(CodecError::Truncated)
}

pub fn decode_varint_signed(buf: &[u8]) -> Result<(i64, usize)> {
    let (raw, consumed) = decode_varint_unsigned(buf)?;
    Ok((zigzag_decode(raw), consumed))
}

fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

fn zigzag_decode(raw: u64) -> i64 {
    ((raw >> 1) as i64) ^ -((raw & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_termination(bytes: &[u8]) {
        let (last, rest) = bytes.split_last().unwrap();
        assert!(rest.iter().all(|b| b & 0x80 != 0), "{:02x?}", bytes);
        assert_eq!(last & 0x80, 0, "{:02x?}", bytes);
    }

    #[test]
    fn test_unsigned_known_values() {
        assert_eq!(encode_varint_unsigned(0), vec![0x00]);
        assert_eq!(encode_varint_unsigned(1), vec![0x01]);
        assert_eq!(encode_varint_unsigned(127), vec![0x7F]);
        assert_eq!(encode_varint_unsigned(128), vec![0x80, 0x01]);
        assert_eq!(encode_varint_unsigned(300), vec![0xAC, 0x02]);
        assert_eq!(encode_varint_unsigned(16_384), vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_unsigned_max_is_ten_bytes() {
        let encoded = encode_varint_unsigned(u64::MAX);
        assert_eq!(encoded.len(), MAX_VARINT_LEN);
        assert_eq!(encoded[9], 0x01);
        assert_termination(&encoded);
    }

    #[test]
    fn test_termination_bit() {
        for value in [1u64, 127, 128, 300, 65_535, 381_837, 1 << 35, u64::MAX] {
            assert_termination(&encode_varint_unsigned(value));
        }
    }

    #[test]
    fn test_signed_doubles_non_negative() {
        assert_eq!(encode_varint_signed(5), encode_varint_unsigned(10));
        assert_eq!(encode_varint_signed(0), vec![0x00]);
        assert_eq!(encode_varint_signed(64), vec![0x80, 0x01]);
        assert_eq!(encode_varint_signed(381_837), encode_varint_unsigned(763_674));
    }

    #[test]
    fn test_signed_negative_zigzag() {
        assert_eq!(encode_varint_signed(-1), vec![0x01]);
        assert_eq!(encode_varint_signed(-2), vec![0x03]);
        assert_eq!(encode_varint_signed(-65), vec![0x81, 0x01]);
        assert_eq!(encode_varint_signed(i64::MIN), encode_varint_unsigned(u64::MAX));
    }

    #[test]
    fn test_into_appends() {
        let mut out = vec![0xFF];
        encode_varint_unsigned_into(300, &mut out);
        encode_varint_signed_into(-1, &mut out);
        assert_eq!(out, vec![0xFF, 0xAC, 0x02, 0x01]);
    }

    #[test]
    fn test_varint_len() {
        for value in [0u64, 1, 127, 128, 16_383, 16_384, u32::MAX as u64, u64::MAX] {
            assert_eq!(varint_len_unsigned(value), encode_varint_unsigned(value).len());
        }
    }

    #[test]
    fn test_decode_reports_consumed() {
        assert_eq!(decode_varint_unsigned(&[0xAC, 0x02, 0xFF]).unwrap(), (300, 2));
        assert_eq!(decode_varint_unsigned(&[0x00]).unwrap(), (0, 1));
        assert_eq!(decode_varint_signed(&[0x03]).unwrap(), (-2, 1));
    }

    #[test]
    fn test_decode_extremes() {
        let encoded = encode_varint_unsigned(u64::MAX);
        assert_eq!(decode_varint_unsigned(&encoded).unwrap(), (u64::MAX, 10));

        for value in [i64::MIN, i64::MAX, -1, 0] {
            let encoded = encode_varint_signed(value);
            assert_eq!(decode_varint_signed(&encoded).unwrap(), (value, encoded.len()));
        }
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode_varint_unsigned(&[]), Err(CodecError::Truncated));
        assert_eq!(decode_varint_unsigned(&[0x80]), Err(CodecError::Truncated));
        assert_eq!(decode_varint_unsigned(&[0xAC]), Err(CodecError::Truncated));
    }

    #[test]
    fn test_decode_overflow() {
        let mut too_big = vec![0xFF; 9];
        too_big.push(0x02);
        assert_eq!(decode_varint_unsigned(&too_big), Err(CodecError::Overflow));

        let eleven = vec![0x80; 11];
        assert_eq!(decode_varint_unsigned(&eleven), Err(CodecError::Overflow));
    }

    #[test]
    fn test_decode_non_minimal() {
        assert_eq!(decode_varint_unsigned(&[0x80, 0x00]), Err(CodecError::NonMinimal));
        assert_eq!(decode_varint_unsigned(&[0x81, 0x80, 0x00]), Err(CodecError::NonMinimal));
    }
}
