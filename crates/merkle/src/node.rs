use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::hasher::MerkleHasher;

/// Node of a commitment tree.  A leaf has no children; an internal node hashes
/// the concatenation of its children's hashes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MerkleNode {
    left: Option<Box<MerkleNode>>,
    right: Option<Box<MerkleNode>>,
    hash: B256,
}

impl MerkleNode {
    pub fn leaf(hash: B256) -> Self {
        Self {
            left: None,
            right: None,
            hash,
        }
    }

    /// Creates the parent of `left` and `right`.
    pub fn join<H: MerkleHasher>(left: MerkleNode, right: MerkleNode) -> Self {
        let hash = H::hash_node(&left.hash, &right.hash);
        Self {
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            hash,
        }
    }

    /// Creates the parent of `first` and `second` with its child slots
    /// swapped: `second` sits on the left, `first` on the right.  The hash is
    /// still H(first || second).
    pub(crate) fn join_swapped<H: MerkleHasher>(first: MerkleNode, second: MerkleNode) -> Self {
        let hash = H::hash_node(&first.hash, &second.hash);
        Self {
            left: Some(Box::new(second)),
            right: Some(Box::new(first)),
            hash,
        }
    }

    pub fn hash(&self) -> &B256 {
        &self.hash
    }

    pub fn left(&self) -> Option<&MerkleNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&MerkleNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A commitment structure.  The root hash is what gets published on the root
/// chain.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MerkleTree {
    root: MerkleNode,
}

impl MerkleTree {
    pub fn new(root: MerkleNode) -> Self {
        Self { root }
    }

    /// Tree over no leaves, whose root is the hash of the empty string.
    pub fn empty<H: MerkleHasher>() -> Self {
        Self::new(MerkleNode::leaf(H::empty_hash()))
    }

    pub fn root(&self) -> &MerkleNode {
        &self.root
    }

    pub fn root_hash(&self) -> &B256 {
        self.root.hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Keccak256Hasher;

    type H = Keccak256Hasher;

    #[test]
    fn test_join_swapped_keeps_hash_order() {
        let a = MerkleNode::leaf(B256::repeat_byte(1));
        let b = MerkleNode::leaf(B256::repeat_byte(2));

        let natural = MerkleNode::join::<H>(a.clone(), b.clone());
        let swapped = MerkleNode::join_swapped::<H>(a.clone(), b.clone());

        assert_eq!(natural.hash(), swapped.hash());
        assert_eq!(swapped.left(), Some(&b));
        assert_eq!(swapped.right(), Some(&a));
        assert_eq!(natural.left(), Some(&a));
    }
}
