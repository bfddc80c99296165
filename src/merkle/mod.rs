//! Domain-separated Merkle node hashing
//!
//! Leaves hash as `digest(0x00 || value)` and inner nodes as
//! `digest(0x01 || left || right)`, so a leaf digest can never be replayed
//! as an inner node or the other way round.

pub mod hash;

pub use hash::Hash;

use sha2::digest::Output;
use sha2::{Digest, Sha256};

pub const LEAF_PREFIX: u8 = 0x00;
pub const INNER_PREFIX: u8 = 0x01;

/// Leaf hash under an arbitrary digest
pub fn leaf_hash_with<D: Digest>(value: &[u8]) -> Output<D> {
    let mut hasher = D::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(value);
    hasher.finalize()
}

/// Inner-node hash under an arbitrary digest. Child order is significant.
pub fn inner_hash_with<D: Digest>(left: &[u8], right: &[u8]) -> Output<D> {
    let mut hasher = D::new();
    hasher.update([INNER_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize()
}

pub fn merkle_leaf_hash(value: &[u8]) -> Hash {
    Hash::from_digest(leaf_hash_with::<Sha256>(value))
}

pub fn merkle_inner_hash(left: &[u8], right: &[u8]) -> Hash {
    Hash::from_digest(inner_hash_with::<Sha256>(left, right))
}
