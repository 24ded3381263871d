use std::marker::PhantomData;

use alloy_primitives::{B256, keccak256};
use digest::{Digest, consts::U32};

/// Generic merkle hashing trait.
pub trait MerkleHasher {
    /// Hashes an arbitrary byte string.
    fn hash_bytes(data: &[u8]) -> B256;

    /// Combines the left and right nodes to form their parent.
    fn hash_node(left: &B256, right: &B256) -> B256 {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(left.as_slice());
        buf[32..].copy_from_slice(right.as_slice());
        Self::hash_bytes(&buf)
    }

    /// Root of a tree with no leaves, H("").
    fn empty_hash() -> B256 {
        Self::hash_bytes(&[])
    }

    /// Hash of the padding node standing in for a missing right sibling,
    /// H(32 zero bytes).
    fn zero_leaf_hash() -> B256 {
        Self::hash_bytes(B256::ZERO.as_slice())
    }
}

/// Ethereum Keccak-256, the hash the root chain verifies proofs with.
#[derive(Copy, Clone, Debug, Default)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    fn hash_bytes(data: &[u8]) -> B256 {
        keccak256(data)
    }
}

/// Generic impl over [`Digest`] impls with a 32 byte output.
#[derive(Copy, Clone, Debug, Default)]
pub struct DigestHasher<D>(PhantomData<D>);

impl<D: Digest<OutputSize = U32>> MerkleHasher for DigestHasher<D> {
    fn hash_bytes(data: &[u8]) -> B256 {
        let out: [u8; 32] = D::digest(data).into();
        B256::from(out)
    }

    fn hash_node(left: &B256, right: &B256) -> B256 {
        let mut context = D::new();
        context.update(left);
        context.update(right);
        let out: [u8; 32] = context.finalize().into();
        B256::from(out)
    }
}
