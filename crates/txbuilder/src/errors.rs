use plasma_chain_types::{Address, Amount};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No combination of at most two candidates covers the amount.
    #[error("no suitable UTXOs to pay {requested}")]
    NoSuitableUtxos { requested: Amount },

    /// A candidate holds no output owned by the sender.  Callers are expected
    /// to pass only the sender's transactions.
    #[error("candidate {position} has no output owned by {owner}")]
    OwnerMismatch { position: usize, owner: Address },
}

pub type SelectionResult<T> = Result<T, SelectionError>;

#[derive(Debug, Error)]
pub enum TxBuildError<E> {
    #[error("selection: {0}")]
    Selection(#[from] SelectionError),

    /// The UTXO source failed to produce candidates.
    #[error("utxo source: {0}")]
    Source(E),
}
