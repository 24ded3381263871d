//! Trees over an arbitrary number of leaves, without padding.
//!
//! Unlike the fixed-depth builder, an odd trailing node is carried up to the
//! next level as is.  The resulting depth depends on the leaf count, and there
//! is no proof format for these trees.
//!
//! Parents formed while reducing levels store their children in swapped slots,
//! the second node on the left.  Hashes always cover the nodes in order.  The root joins the final two nodes
//! in natural order.

use alloy_primitives::B256;

use crate::{
    hasher::{Keccak256Hasher, MerkleHasher},
    node::{MerkleNode, MerkleTree},
};

/// Builds a variable-arity tree over `leaves` with Keccak-256.
pub fn build_variable_tree(leaves: &[B256]) -> MerkleTree {
    build_variable_tree_with::<Keccak256Hasher>(leaves)
}

pub fn build_variable_tree_with<H: MerkleHasher>(leaves: &[B256]) -> MerkleTree {
    let mut level: Vec<MerkleNode> = leaves.iter().copied().map(MerkleNode::leaf).collect();

    while level.len() > 2 {
        level = reduce_carrying::<H>(level);
    }

    let mut nodes = level.into_iter();
    match (nodes.next(), nodes.next()) {
        (None, _) => MerkleTree::empty::<H>(),
        (Some(only), None) => MerkleTree::new(only),
        (Some(left), Some(right)) => MerkleTree::new(MerkleNode::join::<H>(left, right)),
    }
}

fn reduce_carrying<H: MerkleHasher>(level: Vec<MerkleNode>) -> Vec<MerkleNode> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    let mut nodes = level.into_iter();
    while let Some(left) = nodes.next() {
        match nodes.next() {
            Some(right) => next.push(MerkleNode::join_swapped::<H>(left, right)),
            None => next.push(left),
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::build_fixed_tree;

    type H = Keccak256Hasher;

    fn leaf(b: u8) -> B256 {
        B256::repeat_byte(b)
    }

    #[test]
    fn test_empty() {
        let tree = build_variable_tree(&[]);
        assert_eq!(tree.root_hash(), &H::empty_hash());
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_single_leaf_is_root() {
        let tree = build_variable_tree(&[leaf(1)]);
        assert_eq!(tree.root_hash(), &leaf(1));
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_two_leaves() {
        let tree = build_variable_tree(&[leaf(1), leaf(2)]);
        assert_eq!(tree.root_hash(), &H::hash_node(&leaf(1), &leaf(2)));
        assert_eq!(tree.root().left().unwrap().hash(), &leaf(1));
        assert_eq!(tree.root().right().unwrap().hash(), &leaf(2));
    }

    #[test]
    fn test_odd_node_carried_unpadded() {
        let tree = build_variable_tree(&[leaf(1), leaf(2), leaf(3)]);
        let l01 = H::hash_node(&leaf(1), &leaf(2));
        assert_eq!(tree.root_hash(), &H::hash_node(&l01, &leaf(3)));

        // The carried leaf sits directly under the root.
        assert!(tree.root().right().unwrap().is_leaf());

        // The reduced pair keeps its leaves in swapped slots.
        let pair = tree.root().left().unwrap();
        assert_eq!(pair.hash(), &l01);
        assert_eq!(pair.left().unwrap().hash(), &leaf(2));
        assert_eq!(pair.right().unwrap().hash(), &leaf(1));
    }

    #[test]
    fn test_five_leaves() {
        let l: Vec<B256> = (1..=5).map(leaf).collect();
        let tree = build_variable_tree(&l);

        let a = H::hash_node(&l[0], &l[1]);
        let b = H::hash_node(&l[2], &l[3]);
        // [a, b, l4] -> [H(a, b), l4] -> root
        let expected = H::hash_node(&H::hash_node(&a, &b), &l[4]);
        assert_eq!(tree.root_hash(), &expected);
    }

    #[test]
    fn test_differs_from_fixed_tree() {
        let l: Vec<B256> = (1..=3).map(leaf).collect();
        let fixed = build_fixed_tree(&l).unwrap();
        assert_ne!(build_variable_tree(&l).root_hash(), fixed.root_hash());
    }
}
