//! Deterministic authorization predicate for factored invoices.
//!
//! Given an immutable prior [`InvoiceState`], a requested [`Action`] and a
//! [`TransactionContext`] describing the proposed transaction (signers,
//! outputs, validity window), the validator decides whether the transition
//! is legal. It approves or rejects; it never moves funds.
//!
//! Layout: `types` is the state/action model, `context` the pure readers
//! over a transaction snapshot, `validate` the per-action rule sets, and
//! this file the contract surface — the raw-payload entry adapter plus a
//! storage-backed invoice lifecycle around the pure core.

#![no_std]

use soroban_sdk::{contract, contractimpl, Env, Symbol, TryFromVal, Val};

mod context;
mod error;
mod events;
mod types;
mod validate;

pub use context::{amount_delivered_to, is_signed_by, is_time_reachable};
pub use error::Error;
pub use types::{
    Action, AssetQuantity, InvoiceState, SettlementAsset, TransactionContext, TxOut,
};
pub use validate::validate_transition;

#[contract]
pub struct FactoringValidator;

#[contractimpl]
impl FactoringValidator {
    /// Entry adapter: decode three untyped payloads and run the validator.
    ///
    /// Decoding is all-or-nothing; a malformed payload aborts before any
    /// business rule runs. On a rule violation the invocation aborts with
    /// that rule's label. `Ok(())` means the transition is permitted.
    pub fn check_transition(
        env: Env,
        state: Val,
        action: Val,
        context: Val,
    ) -> Result<(), Error> {
        let state =
            InvoiceState::try_from_val(&env, &state).map_err(|_| Error::MalformedState)?;
        let action = Action::try_from_val(&env, &action).map_err(|_| Error::MalformedAction)?;
        let ctx = TransactionContext::try_from_val(&env, &context)
            .map_err(|_| Error::MalformedContext)?;
        validate::validate_transition(&state, &action, &ctx)
    }

    /// Issuance: store a new invoice under a unique id.
    ///
    /// The state is stored as supplied; in particular a non-positive
    /// `amount` is not rejected here — positivity only matters at payment
    /// time.
    pub fn create_invoice(
        env: Env,
        invoice_id: Symbol,
        state: InvoiceState,
    ) -> Result<Symbol, Error> {
        if env.storage().instance().has(&invoice_id) {
            return Err(Error::InvoiceAlreadyExists);
        }
        env.storage().instance().set(&invoice_id, &state);
        events::emit_created(&env, &invoice_id, &state);
        Ok(invoice_id)
    }

    /// Validate `action` against the stored invoice and, if permitted,
    /// persist the successor state: assignment redirects the receivable,
    /// `Pay`/`MarkPaid` settle it, `Cancel` ends its active life.
    pub fn apply(
        env: Env,
        invoice_id: Symbol,
        action: Action,
        context: TransactionContext,
    ) -> Result<(), Error> {
        let state: InvoiceState = env
            .storage()
            .instance()
            .get(&invoice_id)
            .ok_or(Error::InvoiceNotFound)?;
        validate::validate_transition(&state, &action, &context)?;
        match action {
            Action::AssignTo(factor) => {
                env.storage()
                    .instance()
                    .set(&invoice_id, &state.assigned(factor.clone()));
                events::emit_assigned(&env, &invoice_id, &factor);
            }
            Action::Pay(_, _) => {
                env.storage().instance().set(&invoice_id, &state.settled());
                events::emit_settled(&env, &invoice_id, &state.recipient(), state.amount);
            }
            Action::MarkPaid => {
                env.storage().instance().set(&invoice_id, &state.settled());
                events::emit_marked_paid(&env, &invoice_id);
            }
            Action::Cancel => {
                env.storage().instance().remove(&invoice_id);
                events::emit_cancelled(&env, &invoice_id);
            }
        }
        Ok(())
    }

    pub fn get_invoice(env: Env, invoice_id: Symbol) -> Result<InvoiceState, Error> {
        env.storage()
            .instance()
            .get(&invoice_id)
            .ok_or(Error::InvoiceNotFound)
    }

    /// Payment status of a stored invoice.
    pub fn is_settled(env: Env, invoice_id: Symbol) -> Result<bool, Error> {
        let state: InvoiceState = env
            .storage()
            .instance()
            .get(&invoice_id)
            .ok_or(Error::InvoiceNotFound)?;
        Ok(state.paid)
    }
}
