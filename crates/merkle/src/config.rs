//! Tree shape configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::{MerkleError, MerkleResult};

/// Default number of levels in a block commitment tree, counting the leaf
/// level.
pub const DEFAULT_TREE_DEPTH: u8 = 16;

/// Shallowest supported fixed tree: a leaf level and a root.
pub const MIN_TREE_DEPTH: u8 = 2;

/// Deepest supported fixed tree.
pub const MAX_TREE_DEPTH: u8 = 17;

/// Validated shape of a fixed-depth tree.
///
/// `depth` counts the leaf level, so a tree runs `depth - 1` reduction rounds,
/// holds at most `2^(depth - 1)` leaves and produces proofs of `depth - 1`
/// sibling hashes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FixedTreeParams {
    depth: u8,
}

impl FixedTreeParams {
    /// Parameters of block commitment trees.
    pub const BLOCK: Self = Self {
        depth: DEFAULT_TREE_DEPTH,
    };

    pub fn new(depth: u8) -> MerkleResult<Self> {
        if !(MIN_TREE_DEPTH..=MAX_TREE_DEPTH).contains(&depth) {
            return Err(MerkleError::InvalidDepth(depth));
        }
        Ok(Self { depth })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Number of pairwise reduction rounds from the leaves to the root.
    pub fn rounds(&self) -> u32 {
        u32::from(self.depth) - 1
    }

    /// Maximum number of leaves.
    pub fn capacity(&self) -> usize {
        1 << self.rounds()
    }
}

impl Default for FixedTreeParams {
    fn default() -> Self {
        Self::BLOCK
    }
}

fn default_depth() -> u8 {
    DEFAULT_TREE_DEPTH
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedTreeConfig {
    /// Levels in the tree, including the leaf level.
    #[serde(default = "default_depth")]
    pub depth: u8,
}

impl Default for FixedTreeConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_TREE_DEPTH,
        }
    }
}

/// Commitment settings as they appear in a node's TOML config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerkleConfig {
    #[serde(default)]
    pub fixed_tree: FixedTreeConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed merkle config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid merkle config: {0}")]
    Invalid(#[from] MerkleError),
}

impl MerkleConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.fixed_tree_params()?;
        Ok(config)
    }

    pub fn fixed_tree_params(&self) -> MerkleResult<FixedTreeParams> {
        FixedTreeParams::new(self.fixed_tree.depth)
    }
}
