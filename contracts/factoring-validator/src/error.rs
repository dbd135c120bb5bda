use soroban_sdk::contracterror;

/// Every way a proposed transition can fail. Exactly one code is ever
/// reported per attempt: decode failures abort before any rule runs, and
/// the rule sets are plain conjunctions, so the first failing conjunct's
/// label is the whole story.
///
/// Codes are stable; renumbering breaks off-chain matching.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    // Decode failures: payload did not decode into the typed model.
    MalformedState = 1,
    MalformedAction = 2,
    MalformedContext = 3,

    // Rule violations, one per conjunct.
    OnlyIssuerCanAssign = 10,
    CannotAssignIfPaid = 11,
    BuyerSignatureRequired = 12,
    NonPositivePayment = 13,
    PartialPaymentNotAllowed = 14,
    PaymentTimeUnreachable = 15,
    DestinationMustReceiveStableToken = 16,
    KycAuthoritySignatureRequired = 17,
    OnlyIssuerCanMarkPaid = 18,
    OnlyIssuerCanCancel = 19,
    CannotCancelIfPaid = 20,

    // Lifecycle faults outside the validator proper.
    InvoiceAlreadyExists = 30,
    InvoiceNotFound = 31,
}
