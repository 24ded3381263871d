use alloy_primitives::U256;
use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

/// Reference to a previously created output being spent.
///
/// A deposit is spent through an input whose position is all zero but which
/// carries the root-chain deposit nonce.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Arbitrary, Serialize, Deserialize)]
pub struct Input {
    block_num: u64,
    tx_idx: u32,
    out_idx: u8,
    deposit_nonce: U256,
}

impl Input {
    pub fn new(block_num: u64, tx_idx: u32, out_idx: u8) -> Self {
        Self {
            block_num,
            tx_idx,
            out_idx,
            deposit_nonce: U256::ZERO,
        }
    }

    /// Input spending the root-chain deposit identified by `nonce`.
    pub fn deposit(nonce: U256) -> Self {
        Self {
            deposit_nonce: nonce,
            ..Self::zero()
        }
    }

    /// The sentinel filling an unused input slot.
    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn block_num(&self) -> u64 {
        self.block_num
    }

    pub fn tx_idx(&self) -> u32 {
        self.tx_idx
    }

    pub fn out_idx(&self) -> u8 {
        self.out_idx
    }

    pub fn deposit_nonce(&self) -> U256 {
        self.deposit_nonce
    }

    fn has_zero_position(&self) -> bool {
        self.block_num == 0 && self.tx_idx == 0 && self.out_idx == 0
    }

    pub fn is_zero(&self) -> bool {
        self.has_zero_position() && self.deposit_nonce.is_zero()
    }

    pub fn is_deposit(&self) -> bool {
        self.has_zero_position() && !self.deposit_nonce.is_zero()
    }
}
