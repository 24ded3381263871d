use alloy_primitives::Address;
use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::Amount;

/// Assignment of `denom` to `owner`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Arbitrary, Serialize, Deserialize)]
pub struct Output {
    owner: Address,
    denom: Amount,
}

impl Output {
    pub fn new(owner: Address, denom: Amount) -> Self {
        Self { owner, denom }
    }

    /// The sentinel filling an unused output slot: zero owner, zero denom.
    pub fn zero() -> Self {
        Self::new(Address::ZERO, Amount::ZERO)
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn denom(&self) -> Amount {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.owner.is_zero() && self.denom.is_zero()
    }

    pub fn is_owned_by(&self, addr: &Address) -> bool {
        &self.owner == addr
    }
}
