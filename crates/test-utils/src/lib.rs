//! Test fixtures shared across the plasma crates.

use arbitrary::{Arbitrary, Unstructured};
use plasma_chain_types::{
    Address, Amount, ConfirmedTransaction, Input, Output, OutputIndex, Transaction,
};
use rand_core::{CryptoRngCore, OsRng};

/// The default buffer size for the `ArbitraryGenerator`.
const ARB_GEN_LEN: usize = 16_384;

#[derive(Debug)]
pub struct ArbitraryGenerator {
    buf: Vec<u8>, // Persistent buffer
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    /// Creates a new `ArbitraryGenerator` with a default buffer size.
    pub fn new() -> Self {
        Self::new_with_size(ARB_GEN_LEN)
    }

    /// Creates a new `ArbitraryGenerator` with a specified buffer size.
    pub fn new_with_size(s: usize) -> Self {
        Self { buf: vec![0u8; s] }
    }

    /// Generates an arbitrary instance of type `T` using [`OsRng`].
    pub fn generate<T>(&mut self) -> T
    where
        T: for<'a> Arbitrary<'a> + Clone,
    {
        self.generate_with_rng::<T, OsRng>(&mut OsRng)
    }

    /// Generates an arbitrary instance of type `T` from the provided RNG.
    pub fn generate_with_rng<T, R>(&mut self, rng: &mut R) -> T
    where
        T: for<'a> Arbitrary<'a> + Clone,
        R: CryptoRngCore,
    {
        const MAX_ATTEMPTS: usize = 16;
        let mut last_error = None;

        for _ in 0..MAX_ATTEMPTS {
            rng.fill_bytes(&mut self.buf);
            let mut u = Unstructured::new(&self.buf);
            match T::arbitrary(&mut u) {
                Ok(value) => return value,
                Err(err) => last_error = Some(err),
            }
        }

        let error_msg = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        panic!("Failed to generate arbitrary instance: {error_msg}");
    }

    /// Random 20-byte address.
    pub fn address(&mut self) -> Address {
        Address::from(self.generate::<[u8; 20]>())
    }

    /// Random non-zero input, standing in for whatever the transaction spent.
    pub fn input(&mut self) -> Input {
        let block_num = 1 + u64::from(self.generate::<u32>());
        Input::new(block_num, self.generate(), self.generate::<bool>() as u8)
    }

    /// Confirmed transaction at `(block_num, tx_idx)` paying `denom` to `owner`
    /// in output `slot`.  The other output goes to a random address.
    pub fn owned_utxo(
        &mut self,
        owner: Address,
        denom: Amount,
        slot: OutputIndex,
        block_num: u64,
        tx_idx: u32,
    ) -> ConfirmedTransaction {
        let owned = Output::new(owner, denom);
        let other = Output::new(self.address(), Amount::from(self.generate::<u32>()));
        let (output0, output1) = match slot {
            OutputIndex::First => (owned, other),
            OutputIndex::Second => (other, owned),
        };
        let tx = Transaction::new(self.input(), self.input(), output0, output1, Amount::ZERO);
        ConfirmedTransaction::new(tx, block_num, tx_idx)
    }

    /// One confirmed transaction per amount, all owned by `owner`.
    ///
    /// Entry `i` sits at block `i + 1`, index `i`, and the owned output
    /// alternates between the two slots.
    pub fn utxo_set(&mut self, owner: Address, amounts: &[u64]) -> Vec<ConfirmedTransaction> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, amt)| {
                let slot = if i % 2 == 0 {
                    OutputIndex::First
                } else {
                    OutputIndex::Second
                };
                self.owned_utxo(owner, Amount::from(*amt), slot, i as u64 + 1, i as u32)
            })
            .collect()
    }
}
