use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::hasher::MerkleHasher;

/// Inclusion proof: the sibling hashes on the path from a leaf to the root,
/// ordered leaf first.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MerkleProof {
    cohashes: Vec<B256>,
}

impl MerkleProof {
    pub fn from_cohashes(cohashes: Vec<B256>) -> Self {
        Self { cohashes }
    }

    pub fn cohashes(&self) -> &[B256] {
        &self.cohashes
    }

    pub fn len(&self) -> usize {
        self.cohashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cohashes.is_empty()
    }

    /// Concatenated sibling hashes, the form the root chain contract takes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cohashes
            .iter()
            .flat_map(|h| h.as_slice().iter().copied())
            .collect()
    }

    /// Folds `leaf` up the tree.  Bit `i` of `index` tells whether the leaf's
    /// ancestor at level `i` is a right child, in which case the sibling is
    /// hashed on the left.
    pub fn compute_root<H: MerkleHasher>(&self, leaf: &B256, index: usize) -> B256 {
        let mut cur = *leaf;
        let mut pos = index;
        for sibling in &self.cohashes {
            cur = if pos & 1 == 0 {
                H::hash_node(&cur, sibling)
            } else {
                H::hash_node(sibling, &cur)
            };
            pos >>= 1;
        }
        cur
    }

    pub fn verify<H: MerkleHasher>(&self, leaf: &B256, index: usize, root: &B256) -> bool {
        &self.compute_root::<H>(leaf, index) == root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Keccak256Hasher;

    type H = Keccak256Hasher;

    #[test]
    fn test_two_level_fold() {
        let leaves = [
            B256::repeat_byte(1),
            B256::repeat_byte(2),
            B256::repeat_byte(3),
            B256::repeat_byte(4),
        ];
        let l01 = H::hash_node(&leaves[0], &leaves[1]);
        let l23 = H::hash_node(&leaves[2], &leaves[3]);
        let root = H::hash_node(&l01, &l23);

        let proof = MerkleProof::from_cohashes(vec![leaves[3], l01]);
        assert!(proof.verify::<H>(&leaves[2], 2, &root));
        assert!(!proof.verify::<H>(&leaves[2], 3, &root));
        assert!(!proof.verify::<H>(&leaves[3], 2, &root));
    }

    #[test]
    fn test_to_bytes() {
        let proof = MerkleProof::from_cohashes(vec![B256::repeat_byte(0xaa), B256::repeat_byte(0xbb)]);
        let bytes = proof.to_bytes();
        assert_eq!(bytes.len(), 64);
        assert!(bytes[..32].iter().all(|b| *b == 0xaa));
        assert!(bytes[32..].iter().all(|b| *b == 0xbb));
    }
}
