//! Soroban events for the invoice lifecycle, one per persisted
//! transition, so off-chain indexers can follow invoices without polling
//! storage.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::InvoiceState;

pub fn emit_created(env: &Env, invoice_id: &Symbol, state: &InvoiceState) {
    env.events().publish(
        (symbol_short!("invoice"), symbol_short!("created")),
        (invoice_id.clone(), state.issuer.clone(), state.buyer.clone(), state.amount),
    );
}

pub fn emit_assigned(env: &Env, invoice_id: &Symbol, factor: &Address) {
    env.events().publish(
        (symbol_short!("invoice"), symbol_short!("assigned")),
        (invoice_id.clone(), factor.clone()),
    );
}

pub fn emit_settled(env: &Env, invoice_id: &Symbol, recipient: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("invoice"), symbol_short!("settled")),
        (invoice_id.clone(), recipient.clone(), amount),
    );
}

/// Issuer attestation; no recipient or amount to report.
pub fn emit_marked_paid(env: &Env, invoice_id: &Symbol) {
    env.events().publish(
        (symbol_short!("invoice"), symbol_short!("marked")),
        invoice_id.clone(),
    );
}

pub fn emit_cancelled(env: &Env, invoice_id: &Symbol) {
    env.events().publish(
        (symbol_short!("invoice"), symbol_short!("cancelled")),
        invoice_id.clone(),
    );
}
