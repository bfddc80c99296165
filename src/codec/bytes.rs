use tracing::debug;

use crate::codec::error::{CodecError, Result};
use crate::codec::varint::{decode_varint_unsigned, encode_varint_unsigned_into, varint_len_unsigned};

/// Encode a byte string as `uvarint(len) || bytes`
pub fn encode_length_prefixed(value: &[u8]) -> Vec<u8> {
    let len = value.len() as u64;
    let mut out = Vec::with_capacity(varint_len_unsigned(len) + value.len());
    encode_varint_unsigned_into(len, &mut out);
    out.extend_from_slice(value);
    out
}

/// Decode a length-prefixed byte string, returning (payload, bytes_consumed)
pub fn decode_length_prefixed(buf: &[u8]) -> Result<(&[u8], usize)> {
    let (len, prefix_len) = decode_varint_unsigned(buf)?;
    let remaining = buf.len() - prefix_len;

    if len > remaining as u64 {
        debug!("length prefix {} exceeds {} remaining bytes", len, remaining);
        return Err(CodecError::Truncated);
    }

    let end = prefix_len + len as usize;
    Ok((&buf[prefix_len..end], end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_payload() {
        assert_eq!(encode_length_prefixed(b"abc"), vec![0x03, b'a', b'b', b'c']);
        assert_eq!(encode_length_prefixed(&[]), vec![0x00]);
    }

    #[test]
    fn test_app_hash_prefix() {
        let app_hash = [0x1Cu8; 32];
        let encoded = encode_length_prefixed(&app_hash);
        assert_eq!(encoded[0], 0x20);
        assert_eq!(&encoded[1..], &app_hash);
    }

    #[test]
    fn test_long_payload_uses_multibyte_prefix() {
        let payload = vec![7u8; 300];
        let encoded = encode_length_prefixed(&payload);
        assert_eq!(&encoded[..2], &[0xAC, 0x02]);
        assert_eq!(encoded.len(), 302);

        let (decoded, consumed) = decode_length_prefixed(&encoded).unwrap();
        assert_eq!(decoded, payload.as_slice());
        assert_eq!(consumed, 302);
    }

    #[test]
    fn test_decode_leaves_trailing_bytes() {
        let (decoded, consumed) = decode_length_prefixed(&[0x02, 0xAA, 0xBB, 0xCC]).unwrap();
        assert_eq!(decoded, &[0xAA, 0xBB]);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_decode_short_payload() {
        assert_eq!(decode_length_prefixed(&[0x05, 0x01]), Err(CodecError::Truncated));
        assert_eq!(decode_length_prefixed(&[]), Err(CodecError::Truncated));
    }
}
