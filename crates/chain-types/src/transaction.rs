use alloy_primitives::{Address, B256, keccak256};
use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::{
    Amount, Signature,
    errors::{OutputLookupError, OutputLookupResult},
    input::Input,
    output::Output,
    rlp::RlpTransaction,
};

/// Which of the two output slots of a transaction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Arbitrary, Serialize, Deserialize)]
pub enum OutputIndex {
    First,
    Second,
}

impl OutputIndex {
    pub fn as_u8(self) -> u8 {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl From<OutputIndex> for u8 {
    fn from(value: OutputIndex) -> Self {
        value.as_u8()
    }
}

/// The atomic spend unit: two inputs, two outputs and a fee.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Arbitrary, Serialize, Deserialize)]
pub struct Transaction {
    input0: Input,
    sig0: Signature,
    input1: Input,
    sig1: Signature,
    output0: Output,
    output1: Output,
    fee: Amount,
}

impl Transaction {
    /// Creates an unsigned transaction.
    pub fn new(input0: Input, input1: Input, output0: Output, output1: Output, fee: Amount) -> Self {
        Self {
            input0,
            sig0: Signature::ZERO,
            input1,
            sig1: Signature::ZERO,
            output0,
            output1,
            fee,
        }
    }

    /// Transaction with every slot holding its zero sentinel.
    pub fn zero() -> Self {
        Self::new(
            Input::zero(),
            Input::zero(),
            Output::zero(),
            Output::zero(),
            Amount::ZERO,
        )
    }

    pub fn input0(&self) -> &Input {
        &self.input0
    }

    pub fn input1(&self) -> &Input {
        &self.input1
    }

    pub fn sig0(&self) -> &Signature {
        &self.sig0
    }

    pub fn sig1(&self) -> &Signature {
        &self.sig1
    }

    pub fn output0(&self) -> &Output {
        &self.output0
    }

    pub fn output1(&self) -> &Output {
        &self.output1
    }

    pub fn output(&self, idx: OutputIndex) -> &Output {
        match idx {
            OutputIndex::First => &self.output0,
            OutputIndex::Second => &self.output1,
        }
    }

    pub fn fee(&self) -> Amount {
        self.fee
    }

    /// Installs the sender's signature and applies the co-signing rule.
    pub fn apply_signature(&mut self, sig: Signature) {
        self.sig0 = sig;
        self.apply_cosigning();
    }

    /// Copies `sig0` into `sig1` when the second input is real.
    ///
    /// Both inputs of a transaction built by this client belong to the same
    /// sender, so the one signature authorizes spending both of them.
    pub fn apply_cosigning(&mut self) {
        if !self.input1.is_zero() {
            self.sig1 = self.sig0;
        }
    }

    /// Finds the output owned by `addr`, preferring the first slot.
    pub fn output_for(&self, addr: &Address) -> OutputLookupResult<(OutputIndex, &Output)> {
        [OutputIndex::First, OutputIndex::Second]
            .into_iter()
            .map(|idx| (idx, self.output(idx)))
            .find(|(_, out)| out.is_owned_by(addr))
            .ok_or(OutputLookupError::NoOutputFor(*addr))
    }

    pub fn output_index_for(&self, addr: &Address) -> OutputLookupResult<OutputIndex> {
        self.output_for(addr).map(|(idx, _)| idx)
    }

    pub fn is_deposit(&self) -> bool {
        self.input0.is_deposit()
    }

    pub fn is_zero(&self) -> bool {
        !self.is_deposit()
            && self.input0.is_zero()
            && self.input1.is_zero()
            && self.output0.is_zero()
            && self.output1.is_zero()
    }

    pub(crate) fn to_rlp_repr(&self) -> RlpTransaction {
        RlpTransaction::from(self)
    }

    /// Canonical RLP encoding.
    pub fn rlp_bytes(&self) -> Vec<u8> {
        alloy_rlp::encode(self.to_rlp_repr())
    }

    /// Keccak-256 of the canonical encoding.
    pub fn hash(&self) -> B256 {
        keccak256(self.rlp_bytes())
    }
}
