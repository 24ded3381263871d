//! Errors raised while inspecting transactions.

use alloy_primitives::Address;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputLookupError {
    /// Neither output slot of the transaction is owned by the address.
    #[error("no output owned by {0}")]
    NoOutputFor(Address),
}

pub type OutputLookupResult<T> = Result<T, OutputLookupError>;
