//! Commitment trees for child-chain blocks.
//!
//! Two builders live here.  They produce different roots for the same leaves:
//!
//! - [`build_fixed_tree`] pads every level up to a fixed depth (16 levels by
//!   default).  Block roots published on the root chain are built this way,
//!   and [`FixedMerkleTree::proof`] yields the inclusion proofs submitted for
//!   deposits, exits and challenges.
//! - [`build_variable_tree`] carries odd nodes upward without padding.  It has
//!   no proof format.
//!
//! Both are pure functions over their input and are generic over the
//! [`MerkleHasher`], defaulting to Keccak-256.

mod config;
mod errors;
mod fixed;
mod hasher;
mod node;
mod proof;
mod variable;

pub use config::{
    ConfigError, DEFAULT_TREE_DEPTH, FixedTreeConfig, FixedTreeParams, MAX_TREE_DEPTH,
    MIN_TREE_DEPTH, MerkleConfig,
};
pub use errors::{MerkleError, MerkleResult};
pub use fixed::{FixedMerkleTree, build_fixed_tree, build_fixed_tree_with};
pub use hasher::{DigestHasher, Keccak256Hasher, MerkleHasher};
pub use node::{MerkleNode, MerkleTree};
pub use proof::MerkleProof;
pub use variable::{build_variable_tree, build_variable_tree_with};
