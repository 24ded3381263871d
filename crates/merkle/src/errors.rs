use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// More leaves than the fixed-depth tree can hold.  The block builder has
    /// to split or reject the batch.
    #[error("{leaves} leaves exceed tree capacity of {capacity}")]
    CapacityExceeded { leaves: usize, capacity: usize },

    /// Proof requested for a position past the last proven leaf.
    #[error("no proof for leaf {index} (tree proves {available} leaves)")]
    IndexOutOfRange { index: usize, available: usize },

    /// Fixed tree depth outside the supported range.
    #[error("unsupported tree depth {0}")]
    InvalidDepth(u8),
}

pub type MerkleResult<T> = Result<T, MerkleError>;
