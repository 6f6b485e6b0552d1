use rust_decimal::Decimal;

use crate::models::TransactionId;

/// Failures the transaction store reports to its callers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum StoreError {
    /// A transaction with this id is already in the canonical list.
    #[error("transaction {0} already exists")]
    DuplicateId(TransactionId),
    /// `u64::MAX` is never handed out, so it is never accepted either.
    #[error("transaction id {0} is out of range")]
    InvalidId(TransactionId),
    #[error("no transaction ids left to hand out")]
    IdSpaceExhausted,
    #[error("amount {0} is out of range")]
    AmountOutOfRange(Decimal),
}

/// Result of replacing a transaction by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateOutcome {
    Replaced,
    /// No record had the id; the list is unchanged.
    NotFound,
}
