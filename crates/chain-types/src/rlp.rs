//! Canonical RLP layout of transactions.
//!
//! Every integer field is written as a fixed 32-byte big-endian word (a
//! 33-byte RLP string), never as a minimal scalar.  Leaves committed to block
//! roots depend on this exact layout.

use alloy_primitives::{Address, B256, U256};
use alloy_rlp::RlpEncodable;

use crate::{Signature, confirmed::ConfirmedTransaction, transaction::Transaction};

/// Left-pads `value` to a 32-byte big-endian word.
fn word(value: U256) -> B256 {
    B256::from(value.to_be_bytes::<32>())
}

#[derive(Debug, RlpEncodable)]
pub(crate) struct RlpTransaction {
    blk_num0: B256,
    tx_idx0: B256,
    out_idx0: B256,
    deposit_nonce0: B256,
    sig0: Signature,
    blk_num1: B256,
    tx_idx1: B256,
    out_idx1: B256,
    deposit_nonce1: B256,
    sig1: Signature,
    owner0: Address,
    amount0: B256,
    owner1: Address,
    amount1: B256,
    fee: B256,
}

impl From<&Transaction> for RlpTransaction {
    fn from(tx: &Transaction) -> Self {
        let (in0, in1) = (tx.input0(), tx.input1());
        let (out0, out1) = (tx.output0(), tx.output1());
        Self {
            blk_num0: word(U256::from(in0.block_num())),
            tx_idx0: word(U256::from(in0.tx_idx())),
            out_idx0: word(U256::from(in0.out_idx())),
            deposit_nonce0: word(in0.deposit_nonce()),
            sig0: *tx.sig0(),
            blk_num1: word(U256::from(in1.block_num())),
            tx_idx1: word(U256::from(in1.tx_idx())),
            out_idx1: word(U256::from(in1.out_idx())),
            deposit_nonce1: word(in1.deposit_nonce()),
            sig1: *tx.sig1(),
            owner0: *out0.owner(),
            amount0: word(out0.denom()),
            owner1: *out1.owner(),
            amount1: word(out1.denom()),
            fee: word(tx.fee()),
        }
    }
}

#[derive(Debug, RlpEncodable)]
struct RlpConfirmSigs {
    sig0: Signature,
    sig1: Signature,
}

#[derive(Debug, RlpEncodable)]
pub(crate) struct RlpConfirmedTransaction {
    transaction: RlpTransaction,
    signatures: RlpConfirmSigs,
}

impl From<&ConfirmedTransaction> for RlpConfirmedTransaction {
    fn from(ctx: &ConfirmedTransaction) -> Self {
        let [sig0, sig1] = *ctx.signatures();
        Self {
            transaction: ctx.transaction().to_rlp_repr(),
            signatures: RlpConfirmSigs { sig0, sig1 },
        }
    }
}
