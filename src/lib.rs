//! Merkle node hashing and varint encoding for Tendermint header bridging.
//!
//! Both families are pure functions; the only external dependency is the
//! SHA-256 digest from `sha2`.

pub mod codec;
pub mod config;
pub mod merkle;

pub use codec::{
    decode_length_prefixed, decode_varint_signed, decode_varint_unsigned,
    encode_length_prefixed, encode_varint_signed, encode_varint_unsigned, CodecError,
};
pub use merkle::{merkle_inner_hash, merkle_leaf_hash, Hash};
