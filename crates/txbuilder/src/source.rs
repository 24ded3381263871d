//! Wiring between a UTXO store and input selection.

use plasma_chain_types::{Address, Amount, ConfirmedTransaction};
use tracing::{debug, warn};

use crate::{errors::TxBuildError, select::select_and_build};

/// Something that can list the confirmed transactions holding an owner's
/// unspent outputs.
pub trait UtxoSource {
    type Error;

    /// Confirmed transactions with an unspent output owned by `owner`, in the
    /// source's preferred order.  Selection favours earlier entries on ties.
    fn utxos(&self, owner: &Address) -> Result<Vec<ConfirmedTransaction>, Self::Error>;
}

/// Keeps the candidates with an output owned by `from`, preserving order.
pub fn filter_owned(
    from: &Address,
    candidates: Vec<ConfirmedTransaction>,
) -> Vec<ConfirmedTransaction> {
    candidates
        .into_iter()
        .filter(|c| c.transaction().output_for(from).is_ok())
        .collect()
}

/// Builds spend transactions from the UTXOs a [`UtxoSource`] reports.
#[derive(Debug)]
pub struct TxBuilder<S> {
    source: S,
}

impl<S: UtxoSource> TxBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches `from`'s UTXOs and builds an unsigned transaction paying
    /// `amount` to `to`.
    ///
    /// Entries the source returns that `from` does not own are dropped before
    /// selection rather than failing the whole build.
    pub fn build_send(
        &self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<ConfirmedTransaction, TxBuildError<S::Error>> {
        let candidates = self.source.utxos(from).map_err(TxBuildError::Source)?;
        let fetched = candidates.len();

        let owned = filter_owned(from, candidates);
        if owned.len() != fetched {
            warn!(
                %from,
                dropped = fetched - owned.len(),
                "utxo source returned transactions not owned by sender"
            );
        }
        debug!(%from, candidates = owned.len(), %amount, "building send");

        Ok(select_and_build(from, to, amount, &owned)?)
    }
}
