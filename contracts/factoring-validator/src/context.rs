//! Pure queries over a [`TransactionContext`]. The validator composes
//! these; nothing here knows about invoices or actions.

use soroban_sdk::Address;

use crate::types::{SettlementAsset, TransactionContext};

/// Membership test over the attached signer set. No multi-sig or
/// partial-signature semantics.
pub fn is_signed_by(ctx: &TransactionContext, principal: &Address) -> bool {
    ctx.signers.iter().any(|s| s == *principal)
}

/// Total quantity of `asset` delivered to `recipient` across all outputs.
/// Outputs to any other destination are ignored entirely. Returns 0 when
/// nothing matches.
///
/// Accumulation saturates: a transaction claiming more than `i128::MAX`
/// of one asset at one destination still compares correctly against any
/// invoice amount. Non-positive claimed quantities do not count.
pub fn amount_delivered_to(
    ctx: &TransactionContext,
    recipient: &Address,
    asset: &SettlementAsset,
) -> i128 {
    let mut total: i128 = 0;
    for out in ctx.outputs.iter() {
        if out.destination != *recipient {
            continue;
        }
        for aq in out.value.iter() {
            if aq.asset == *asset && aq.quantity > 0 {
                total = total.saturating_add(aq.quantity);
            }
        }
    }
    total
}

/// True iff the declared validity window is non-empty and permits some
/// instant at or after `t`. This confirms the submitter's time claim is
/// consistent with the window; it is not a wall-clock check.
pub fn is_time_reachable(ctx: &TransactionContext, t: u64) -> bool {
    match ctx.valid_until {
        // Empty window (upper below lower) reaches nothing.
        Some(upper) => upper >= ctx.valid_from && upper >= t,
        None => true,
    }
}
