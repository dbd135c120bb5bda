use soroban_sdk::{contracttype, Address, Bytes, BytesN, Vec};

/// The exact stable asset an invoice must be settled in, named by the
/// issuing ledger's (currency symbol, token name) pair. Both halves are
/// opaque bytes; the validator only ever compares them for equality.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementAsset {
    pub currency_symbol: Bytes,
    pub token_name: Bytes,
}

/// One invoice, immutable within a transaction. A permitted transition
/// produces a successor via [`InvoiceState::assigned`] or
/// [`InvoiceState::settled`]; nothing ever mutates a state in place and
/// nothing ever resets `paid` to false.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvoiceState {
    pub issuer: Address,
    pub buyer: Address,
    /// Invoice value in the smallest unit of `settlement_asset`.
    /// Positivity is enforced at payment time, not at creation.
    pub amount: i128,
    pub due_at: u64,
    pub paid: bool,
    /// Off-chain document fingerprint. Carried, never inspected.
    pub document_hash: BytesN<32>,
    /// `None` while the issuer still holds the receivable; `Some(factor)`
    /// once it has been sold on.
    pub assigned_to: Option<Address>,
    pub settlement_asset: SettlementAsset,
    /// Mandatory co-signer on every settlement.
    pub compliance_authority: Address,
}

impl InvoiceState {
    /// Whoever settlement funds must currently land with.
    pub fn recipient(&self) -> Address {
        match &self.assigned_to {
            Some(factor) => factor.clone(),
            None => self.issuer.clone(),
        }
    }

    /// Successor state after a permitted `AssignTo(factor)`.
    pub fn assigned(&self, factor: Address) -> InvoiceState {
        let mut next = self.clone();
        next.assigned_to = Some(factor);
        next
    }

    /// Successor state after a permitted `Pay` or `MarkPaid`.
    pub fn settled(&self) -> InvoiceState {
        let mut next = self.clone();
        next.paid = true;
        next
    }
}

/// The requested transition. Exactly one per transaction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Transfer the right to receive settlement to the named factor.
    AssignTo(Address),
    /// Settle on-ledger: caller-declared amount paid and settlement instant.
    Pay(i128, u64),
    /// Issuer attests that settlement happened off-ledger.
    MarkPaid,
    /// Issuer voids the invoice.
    Cancel,
}

/// Quantity of a single asset inside an output's value.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetQuantity {
    pub asset: SettlementAsset,
    pub quantity: i128,
}

/// One output of the proposed transaction: a destination and the
/// multi-asset value delivered there.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxOut {
    pub destination: Address,
    pub value: Vec<AssetQuantity>,
}

/// Snapshot of the proposed transaction, supplied per attempted
/// transition. This is a claim the submitter makes; the validator checks
/// that the claim is internally consistent with the invoice's rules, it
/// does not verify signatures or clocks itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionContext {
    /// Principals whose signatures are attached to the transaction.
    pub signers: Vec<Address>,
    /// Outputs in transaction order.
    pub outputs: Vec<TxOut>,
    /// Validity window lower bound, inclusive.
    pub valid_from: u64,
    /// Validity window upper bound, inclusive. `None` = open-ended.
    pub valid_until: Option<u64>,
}
