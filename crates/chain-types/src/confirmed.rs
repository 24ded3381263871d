use alloy_primitives::{B256, keccak256};
use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::{Signature, rlp::RlpConfirmedTransaction, transaction::Transaction};

/// A transaction together with its position in a child-chain block and the
/// owners' confirmation signatures.
///
/// Outputs of a confirmed transaction are spent by inputs referencing
/// `(block_num, tx_idx, out_idx)`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Arbitrary, Serialize, Deserialize)]
pub struct ConfirmedTransaction {
    transaction: Transaction,
    signatures: [Signature; 2],
    block_num: u64,
    tx_idx: u32,
}

impl ConfirmedTransaction {
    pub fn new(transaction: Transaction, block_num: u64, tx_idx: u32) -> Self {
        Self {
            transaction,
            signatures: [Signature::ZERO; 2],
            block_num,
            tx_idx,
        }
    }

    /// Wraps a freshly built transaction whose block position is not known yet.
    pub fn unconfirmed(transaction: Transaction) -> Self {
        Self::new(transaction, 0, 0)
    }

    pub fn with_signatures(mut self, signatures: [Signature; 2]) -> Self {
        self.signatures = signatures;
        self
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn into_transaction(self) -> Transaction {
        self.transaction
    }

    pub fn signatures(&self) -> &[Signature; 2] {
        &self.signatures
    }

    pub fn block_num(&self) -> u64 {
        self.block_num
    }

    pub fn tx_idx(&self) -> u32 {
        self.tx_idx
    }

    /// Canonical RLP encoding: the transaction list followed by the list of
    /// confirmation signatures.
    pub fn rlp_bytes(&self) -> Vec<u8> {
        alloy_rlp::encode(RlpConfirmedTransaction::from(self))
    }

    /// Keccak-256 of the canonical encoding.  This is the leaf committed to in
    /// the block's Merkle root.
    pub fn hash(&self) -> B256 {
        keccak256(self.rlp_bytes())
    }
}

/// Computes the commitment leaves of a block's transactions, in block order.
pub fn block_leaves(txs: &[ConfirmedTransaction]) -> Vec<B256> {
    txs.iter().map(ConfirmedTransaction::hash).collect()
}
