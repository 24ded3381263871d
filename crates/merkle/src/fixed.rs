//! Fixed-depth block commitment trees.
//!
//! Leaves are reduced pairwise, left to right, for exactly `depth - 1` rounds.
//! Whenever a level has an odd number of nodes the last one is paired with a
//! padding node hashing to H(32 zero bytes).  Padding is applied at every
//! level, so a tree over a handful of leaves still has the full depth and every
//! proof has the same length.

use alloy_primitives::B256;
use tracing::{trace, warn};

use crate::{
    config::FixedTreeParams,
    errors::{MerkleError, MerkleResult},
    hasher::{Keccak256Hasher, MerkleHasher},
    node::{MerkleNode, MerkleTree},
    proof::MerkleProof,
};

/// Tree produced by [`build_fixed_tree`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedMerkleTree {
    tree: MerkleTree,
    params: FixedTreeParams,
    leaf_count: usize,
    proofs: Vec<MerkleProof>,
}

impl FixedMerkleTree {
    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    pub fn root_hash(&self) -> &B256 {
        self.tree.root_hash()
    }

    pub fn params(&self) -> FixedTreeParams {
        self.params
    }

    /// Number of levels, leaf level included.
    pub fn depth(&self) -> u8 {
        self.params.depth()
    }

    /// Number of leaves the tree was built from, excluding padding.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Proofs of every leaf at the bottom level, indexed by leaf position.
    ///
    /// A padding node at the bottom level is a leaf like any other and has a
    /// proof too, so an odd leaf count yields one extra proof.  Padding nodes
    /// further up sit above the bottom level and have none.
    pub fn proofs(&self) -> &[MerkleProof] {
        &self.proofs
    }

    /// Proof for the leaf at `index`.
    pub fn proof(&self, index: usize) -> MerkleResult<&MerkleProof> {
        self.proofs
            .get(index)
            .ok_or(MerkleError::IndexOutOfRange {
                index,
                available: self.proofs.len(),
            })
    }
}

/// Builds a block commitment tree over `leaves` with Keccak-256 and the
/// default depth of 16.
pub fn build_fixed_tree(leaves: &[B256]) -> MerkleResult<FixedMerkleTree> {
    build_fixed_tree_with::<Keccak256Hasher>(leaves, FixedTreeParams::BLOCK)
}

pub fn build_fixed_tree_with<H: MerkleHasher>(
    leaves: &[B256],
    params: FixedTreeParams,
) -> MerkleResult<FixedMerkleTree> {
    let capacity = params.capacity();
    if leaves.len() > capacity {
        warn!(leaves = leaves.len(), %capacity, "refusing to build over-capacity tree");
        return Err(MerkleError::CapacityExceeded {
            leaves: leaves.len(),
            capacity,
        });
    }

    if leaves.is_empty() {
        return Ok(FixedMerkleTree {
            tree: MerkleTree::empty::<H>(),
            params,
            leaf_count: 0,
            proofs: Vec::new(),
        });
    }

    trace!(leaves = leaves.len(), depth = params.depth(), "building fixed tree");

    let pad = H::zero_leaf_hash();
    let mut level: Vec<MerkleNode> = leaves.iter().copied().map(MerkleNode::leaf).collect();
    for _ in 0..params.rounds() {
        level = reduce_padded::<H>(level, pad);
    }

    // `leaves.len() <= 2^rounds`, so the last round always leaves one node.
    let root = level
        .pop()
        .expect("merkle: fixed tree reduced to an empty level");
    debug_assert!(level.is_empty(), "merkle: fixed tree has multiple roots");

    // All proofs come out of one depth-first pass over the finished tree.
    let mut proofs = Vec::with_capacity(leaves.len() + 1);
    let mut path = Vec::with_capacity(params.rounds() as usize);
    collect_proofs(&root, &mut path, 1, params.depth(), &mut proofs);

    Ok(FixedMerkleTree {
        tree: MerkleTree::new(root),
        params,
        leaf_count: leaves.len(),
        proofs,
    })
}

fn reduce_padded<H: MerkleHasher>(level: Vec<MerkleNode>, pad: B256) -> Vec<MerkleNode> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    let mut nodes = level.into_iter();
    while let Some(left) = nodes.next() {
        let right = nodes.next().unwrap_or_else(|| MerkleNode::leaf(pad));
        next.push(MerkleNode::join::<H>(left, right));
    }
    next
}

fn collect_proofs(
    node: &MerkleNode,
    path: &mut Vec<B256>,
    depth: u8,
    leaf_depth: u8,
    out: &mut Vec<MerkleProof>,
) {
    match (node.left(), node.right()) {
        (Some(left), Some(right)) => {
            path.push(*right.hash());
            collect_proofs(left, path, depth + 1, leaf_depth, out);
            path.pop();

            path.push(*left.hash());
            collect_proofs(right, path, depth + 1, leaf_depth, out);
            path.pop();
        }
        (None, None) if depth == leaf_depth => {
            out.push(MerkleProof::from_cohashes(path.iter().rev().copied().collect()));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use plasma_test_utils::ArbitraryGenerator;
    use proptest::prelude::*;
    use sha2::Sha256;

    use super::*;
    use crate::hasher::DigestHasher;

    type H = Keccak256Hasher;

    fn leaves(n: usize) -> Vec<B256> {
        let mut arb = ArbitraryGenerator::new();
        (0..n).map(|_| B256::from(arb.generate::<[u8; 32]>())).collect()
    }

    fn small(depth: u8) -> FixedTreeParams {
        FixedTreeParams::new(depth).unwrap()
    }

    #[test]
    fn test_empty_tree() {
        let tree = build_fixed_tree(&[]).unwrap();
        assert_eq!(tree.root_hash(), &H::empty_hash());
        assert_eq!(tree.leaf_count(), 0);
        assert_eq!(tree.depth(), 16);
        assert!(tree.proofs().is_empty());
        assert_eq!(
            tree.proof(0),
            Err(MerkleError::IndexOutOfRange {
                index: 0,
                available: 0
            })
        );
    }

    #[test]
    fn test_single_leaf_padding() {
        let leaf = B256::repeat_byte(0x11);
        let tree = build_fixed_tree(&[leaf]).unwrap();
        let pad = H::zero_leaf_hash();

        // Walk down the left spine to the node just above the leaves.
        let mut node = tree.tree().root();
        for _ in 0..14 {
            assert_eq!(node.right().unwrap().hash(), &pad);
            node = node.left().unwrap();
        }
        assert_eq!(node.hash(), &H::hash_node(&leaf, &pad));
        assert_eq!(node.left().unwrap().hash(), &leaf);
        assert_eq!(node.right().unwrap().hash(), &pad);
        assert!(node.left().unwrap().is_leaf());

        let mut expected = leaf;
        for _ in 0..15 {
            expected = H::hash_node(&expected, &pad);
        }
        assert_eq!(tree.root_hash(), &expected);
    }

    #[test]
    fn test_proof_count_and_length() {
        let tree = build_fixed_tree(&leaves(5)).unwrap();
        let proofs = tree.proofs();

        // The fifth leaf is paired with a padding leaf, which is proven too.
        assert_eq!(proofs.len(), 6);
        assert!(proofs.iter().all(|p| p.len() == 15));
        assert!(tree.proof(5).is_ok());
        assert_eq!(
            tree.proof(6),
            Err(MerkleError::IndexOutOfRange {
                index: 6,
                available: 6
            })
        );
    }

    #[test]
    fn test_proof_lookup_reads_stored_proofs() {
        let tree = build_fixed_tree(&leaves(7)).unwrap();
        let proofs = tree.proofs();
        assert_eq!(proofs.len(), 8);
        for (i, stored) in proofs.iter().enumerate() {
            let looked_up = tree.proof(i).unwrap();
            assert!(ptr::eq(looked_up, stored));
        }
    }

    #[test]
    fn test_padding_leaf_proof_verifies() {
        let tree = build_fixed_tree(&leaves(3)).unwrap();
        let proof = tree.proof(3).unwrap();
        assert!(proof.verify::<H>(&H::zero_leaf_hash(), 3, tree.root_hash()));
    }

    #[test]
    fn test_small_full_tree() {
        let input = leaves(4);
        let tree = build_fixed_tree_with::<H>(&input, small(3)).unwrap();

        let l01 = H::hash_node(&input[0], &input[1]);
        let l23 = H::hash_node(&input[2], &input[3]);
        assert_eq!(tree.root_hash(), &H::hash_node(&l01, &l23));

        let proof = tree.proof(2).unwrap();
        assert_eq!(proof.cohashes(), &[input[3], l01]);
    }

    #[test]
    fn test_capacity() {
        let params = small(4);
        assert!(build_fixed_tree_with::<H>(&leaves(8), params).is_ok());
        assert_eq!(
            build_fixed_tree_with::<H>(&leaves(9), params),
            Err(MerkleError::CapacityExceeded {
                leaves: 9,
                capacity: 8
            })
        );

        let too_many = vec![B256::ZERO; (1 << 15) + 1];
        assert_eq!(
            build_fixed_tree(&too_many).map(|t| t.leaf_count()),
            Err(MerkleError::CapacityExceeded {
                leaves: (1 << 15) + 1,
                capacity: 1 << 15
            })
        );
    }

    #[test]
    fn test_hasher_changes_root() {
        let input = leaves(3);
        let keccak = build_fixed_tree(&input).unwrap();
        let sha = build_fixed_tree_with::<DigestHasher<Sha256>>(&input, FixedTreeParams::BLOCK)
            .unwrap();
        assert_ne!(keccak.root_hash(), sha.root_hash());
        assert!(sha.proof(1).unwrap().verify::<DigestHasher<Sha256>>(
            &input[1],
            1,
            sha.root_hash()
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_proofs_round_trip(raw in prop::collection::vec(any::<[u8; 32]>(), 1..40)) {
            let input: Vec<B256> = raw.into_iter().map(B256::from).collect();
            let tree = build_fixed_tree(&input).unwrap();
            let proofs = tree.proofs();
            prop_assert!(proofs.len() >= input.len());
            for (i, leaf) in input.iter().enumerate() {
                prop_assert_eq!(proofs[i].len(), 15);
                prop_assert!(proofs[i].verify::<H>(leaf, i, tree.root_hash()));
            }
        }

        #[test]
        fn proptest_deterministic(raw in prop::collection::vec(any::<[u8; 32]>(), 0..20)) {
            let input: Vec<B256> = raw.into_iter().map(B256::from).collect();
            let a = build_fixed_tree(&input).unwrap();
            let b = build_fixed_tree(&input).unwrap();
            prop_assert_eq!(a.root_hash(), b.root_hash());
            prop_assert_eq!(a.proofs(), b.proofs());
        }

        #[test]
        fn proptest_small_depth_round_trip(
            depth in 2u8..6,
            raw in prop::collection::vec(any::<[u8; 32]>(), 1..32),
        ) {
            let params = FixedTreeParams::new(depth).unwrap();
            let input: Vec<B256> = raw.into_iter().take(params.capacity()).map(B256::from).collect();
            let tree = build_fixed_tree_with::<H>(&input, params).unwrap();
            for (i, leaf) in input.iter().enumerate() {
                let proof = tree.proof(i).unwrap();
                prop_assert_eq!(proof.len(), params.rounds() as usize);
                prop_assert!(proof.verify::<H>(leaf, i, tree.root_hash()));
            }
        }
    }
}
