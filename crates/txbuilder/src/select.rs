//! Input selection for two-input spends.
//!
//! Selection prefers, in order: a single output equal to the amount, a pair
//! summing exactly to it, and otherwise whichever single or pair covers the
//! amount with the least change.  The search over pairs is a two-pointer sweep
//! across the owned outputs sorted by value.

use plasma_chain_types::{
    Address, Amount, ConfirmedTransaction, Input, Output, OutputIndex, Transaction,
};
use tracing::{debug, trace};

use crate::errors::{SelectionError, SelectionResult};

/// Output owned by the sender within one of the candidates.
#[derive(Copy, Clone, Debug)]
struct Utxo<'a> {
    position: usize,
    source: &'a ConfirmedTransaction,
    out_idx: OutputIndex,
    denom: Amount,
}

impl<'a> Utxo<'a> {
    fn resolve(
        from: &Address,
        position: usize,
        source: &'a ConfirmedTransaction,
    ) -> SelectionResult<Self> {
        let (out_idx, out) = source
            .transaction()
            .output_for(from)
            .map_err(|_| SelectionError::OwnerMismatch {
                position,
                owner: *from,
            })?;
        Ok(Self {
            position,
            source,
            out_idx,
            denom: out.denom(),
        })
    }

    fn to_input(self) -> Input {
        Input::new(
            self.source.block_num(),
            self.source.tx_idx(),
            self.out_idx.as_u8(),
        )
    }
}

/// How the inputs of a spend were chosen.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SelectionKind {
    /// One output equal to the amount.
    ExactSingle,
    /// One output larger than the amount.
    SurplusSingle,
    /// Two outputs summing to the amount.
    ExactPair,
    /// Two outputs summing to more than the amount.
    SurplusPair,
}

#[derive(Copy, Clone, Debug)]
enum Selection<'a> {
    Single(Utxo<'a>),
    Pair(Utxo<'a>, Utxo<'a>),
}

/// Ordering key of a pair total.  A sum past `Amount::MAX` sorts after every
/// representable one.
type TotalKey = (bool, Amount);

fn pair_total(a: Amount, b: Amount) -> TotalKey {
    match a.checked_add(b) {
        Some(total) => (false, total),
        None => (true, Amount::MAX),
    }
}

fn single_total(a: Amount) -> TotalKey {
    (false, a)
}

/// Builds a transaction paying `amount` from `from` to `to`, spending at most
/// two of `from`'s outputs among `candidates`.
///
/// The result is unsigned and carries no fee.  It comes wrapped as a
/// [`ConfirmedTransaction`] whose block position is left for the caller to
/// fill in once the transaction is included.
pub fn select_and_build(
    from: &Address,
    to: &Address,
    amount: Amount,
    candidates: &[ConfirmedTransaction],
) -> SelectionResult<ConfirmedTransaction> {
    let (selection, kind) = select(from, amount, candidates)?;
    let tx = assemble(from, to, amount, selection);

    debug!(
        %from,
        %to,
        %amount,
        ?kind,
        change = %tx.output1().denom(),
        "selected inputs for spend"
    );

    Ok(ConfirmedTransaction::unconfirmed(tx))
}

fn select<'a>(
    from: &Address,
    amount: Amount,
    candidates: &'a [ConfirmedTransaction],
) -> SelectionResult<(Selection<'a>, SelectionKind)> {
    let no_match = SelectionError::NoSuitableUtxos { requested: amount };
    if candidates.is_empty() {
        return Err(no_match);
    }

    // First exact match in caller order wins.
    let mut utxos = Vec::with_capacity(candidates.len());
    for (position, source) in candidates.iter().enumerate() {
        let utxo = Utxo::resolve(from, position, source)?;
        if utxo.denom == amount {
            return Ok((Selection::Single(utxo), SelectionKind::ExactSingle));
        }
        utxos.push(utxo);
    }

    // Order among equal denominations is unspecified.
    utxos.sort_unstable_by_key(|u| u.denom);

    let smallest = utxos[0];
    if smallest.denom > amount {
        return Ok((Selection::Single(smallest), SelectionKind::SurplusSingle));
    }

    let mut left = 0;
    let mut right = utxos.len() - 1;
    let mut best_pair: Option<(usize, usize, TotalKey)> = None;
    while left < right {
        let total = pair_total(utxos[left].denom, utxos[right].denom);
        if total == single_total(amount) {
            trace!(left = utxos[left].position, right = utxos[right].position, "exact pair");
            return Ok((
                Selection::Pair(utxos[left], utxos[right]),
                SelectionKind::ExactPair,
            ));
        }

        if total < single_total(amount) {
            left += 1;
            continue;
        }

        // Moving `right` down only ever tightens the surplus for this `left`.
        if best_pair.is_none_or(|(_, _, best)| total < best) {
            best_pair = Some((left, right, total));
        }
        right -= 1;
    }

    // Smallest single output still covering the amount, if any.  It beats a
    // pair with the same or a larger total.
    let covering = utxos.partition_point(|u| u.denom <= amount);
    let single = utxos.get(covering).copied();

    match (single, best_pair) {
        (Some(single), Some((_, _, pair))) if single_total(single.denom) <= pair => {
            Ok((Selection::Single(single), SelectionKind::SurplusSingle))
        }
        (_, Some((l, r, _))) => Ok((
            Selection::Pair(utxos[l], utxos[r]),
            SelectionKind::SurplusPair,
        )),
        (Some(single), None) => Ok((Selection::Single(single), SelectionKind::SurplusSingle)),
        (None, None) => Err(no_match),
    }
}

/// `a + b - amount` for a selected pair.
///
/// Selection only settles on a pair when no single output covers the amount,
/// so both outputs are below it and the change is below the amount.
fn pair_change(a: Amount, b: Amount, amount: Amount) -> Amount {
    match b.checked_sub(amount) {
        Some(rest) => a.saturating_add(rest),
        None => a.saturating_sub(amount - b),
    }
}

fn assemble(from: &Address, to: &Address, amount: Amount, selection: Selection<'_>) -> Transaction {
    let (input0, input1, change) = match selection {
        Selection::Single(u) => (
            u.to_input(),
            Input::zero(),
            u.denom.saturating_sub(amount),
        ),
        Selection::Pair(a, b) => (
            a.to_input(),
            b.to_input(),
            pair_change(a.denom, b.denom, amount),
        ),
    };

    let output1 = if change.is_zero() {
        Output::zero()
    } else {
        Output::new(*from, change)
    };

    let mut tx = Transaction::new(
        input0,
        input1,
        Output::new(*to, amount),
        output1,
        Amount::ZERO,
    );
    tx.apply_cosigning();
    tx
}
