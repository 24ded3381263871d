//! Value types of the plasma child chain.
//!
//! Every transaction has exactly two input slots and two output slots.  An
//! unused slot holds the zero sentinel ([`Input::zero`] / [`Output::zero`]),
//! so the shape of a transaction never changes regardless of how many real
//! inputs or outputs it carries.
//!
//! The types here are plain values.  Nothing in this crate mutates a
//! transaction after it has been handed out, with the single exception of
//! [`Transaction::apply_signature`], which the signing collaborator uses to
//! fill in the spend signatures.

mod confirmed;
mod errors;
mod input;
mod output;
mod rlp;
mod transaction;

pub use alloy_primitives::{Address, B256};
pub use confirmed::{ConfirmedTransaction, block_leaves};
pub use errors::{OutputLookupError, OutputLookupResult};
pub use input::Input;
pub use output::Output;
pub use transaction::{OutputIndex, Transaction};

/// Denomination of an output.
///
/// The child chain encodes every integer as a 256-bit scalar, which bounds the
/// amounts any output can carry.
pub type Amount = alloy_primitives::U256;

/// 65-byte recoverable signature over a transaction.  All zero means "absent".
pub type Signature = alloy_primitives::FixedBytes<65>;

