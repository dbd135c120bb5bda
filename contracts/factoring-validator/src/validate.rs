//! The transition validator: one rule set per [`Action`] variant. Each
//! rule set is a conjunction of named conditions; the first condition
//! that fails decides the error, since the rest cannot rescue it.
//!
//! Everything here is pure. Re-running any check on identical inputs
//! yields the identical outcome; there is no hidden state, no clock, no
//! ledger handle.

use soroban_sdk::Address;

use crate::context::{amount_delivered_to, is_signed_by, is_time_reachable};
use crate::error::Error;
use crate::types::{Action, InvoiceState, TransactionContext};

/// Decide whether `action` is a legal transition out of `state` given the
/// proposed transaction `ctx`. `Ok(())` permits; `Err` carries the label
/// of the violated condition.
pub fn validate_transition(
    state: &InvoiceState,
    action: &Action,
    ctx: &TransactionContext,
) -> Result<(), Error> {
    match action {
        Action::AssignTo(factor) => check_assign(state, factor, ctx),
        Action::Pay(amount_paid, paid_at) => check_pay(state, *amount_paid, *paid_at, ctx),
        Action::MarkPaid => check_mark_paid(state, ctx),
        Action::Cancel => check_cancel(state, ctx),
    }
}

/// Only the issuer may reassign the receivable, and never once settled.
/// The successor's `assigned_to` is set by the caller that constructs it;
/// it is not re-checked here.
fn check_assign(
    state: &InvoiceState,
    _factor: &Address,
    ctx: &TransactionContext,
) -> Result<(), Error> {
    if !is_signed_by(ctx, &state.issuer) {
        return Err(Error::OnlyIssuerCanAssign);
    }
    if state.paid {
        return Err(Error::CannotAssignIfPaid);
    }
    Ok(())
}

/// On-ledger settlement. `amount_paid` and `paid_at` are caller-declared
/// and only bound by the comparisons below; the delivered-value check is
/// the binding monetary condition.
fn check_pay(
    state: &InvoiceState,
    amount_paid: i128,
    paid_at: u64,
    ctx: &TransactionContext,
) -> Result<(), Error> {
    if !is_signed_by(ctx, &state.buyer) {
        return Err(Error::BuyerSignatureRequired);
    }
    if amount_paid <= 0 {
        return Err(Error::NonPositivePayment);
    }
    // No partial settlement: full amount or more.
    if amount_paid < state.amount {
        return Err(Error::PartialPaymentNotAllowed);
    }
    if !is_time_reachable(ctx, paid_at) {
        return Err(Error::PaymentTimeUnreachable);
    }
    // Funds must land with whoever currently holds the receivable.
    let recipient = state.recipient();
    let delivered = amount_delivered_to(ctx, &recipient, &state.settlement_asset);
    if delivered < state.amount {
        return Err(Error::DestinationMustReceiveStableToken);
    }
    // Every settlement is gated by the compliance authority. No exemptions.
    if !is_signed_by(ctx, &state.compliance_authority) {
        return Err(Error::KycAuthoritySignatureRequired);
    }
    Ok(())
}

/// Attestation that settlement happened off-ledger. Issuer signature is
/// the sole condition: no `paid` guard, no value movement, no time check.
/// Deliberately more permissive than `Cancel`.
fn check_mark_paid(state: &InvoiceState, ctx: &TransactionContext) -> Result<(), Error> {
    if !is_signed_by(ctx, &state.issuer) {
        return Err(Error::OnlyIssuerCanMarkPaid);
    }
    Ok(())
}

/// Issuer voids the invoice. A settled invoice can never be cancelled.
fn check_cancel(state: &InvoiceState, ctx: &TransactionContext) -> Result<(), Error> {
    if !is_signed_by(ctx, &state.issuer) {
        return Err(Error::OnlyIssuerCanCancel);
    }
    if state.paid {
        return Err(Error::CannotCancelIfPaid);
    }
    Ok(())
}
