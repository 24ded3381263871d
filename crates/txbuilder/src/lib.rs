//! Spend transaction assembly.
//!
//! Given the sender's confirmed transactions, picks at most two owned outputs
//! covering the amount and builds an unsigned two-in, two-out transaction
//! paying the recipient, with any change returned to the sender and no fee.

mod errors;
mod select;
mod source;

pub use errors::{SelectionError, SelectionResult, TxBuildError};
pub use select::select_and_build;
pub use source::{TxBuilder, UtxoSource, filter_owned};
