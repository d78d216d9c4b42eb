use thiserror::Error;

use crate::models::Operation;
use crate::types::AccountId;

/// Every way a ledger operation can be rejected.
///
/// The `Display` output is the exact message returned to RPC clients, so the
/// identifiers carried by some variants are for logging only.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LedgerError {
    #[error("Please provide all the mandatory fields!")]
    MissingFields,
    #[error("User with this email or ID number already exists")]
    UserExists,
    #[error("Account not found")]
    AccountNotFound {
        account_id: AccountId
    },
    #[error("Sender account not found")]
    SenderNotFound {
        account_id: AccountId
    },
    #[error("Receiver account not found")]
    ReceiverNotFound {
        account_id: AccountId
    },
    #[error("Sender and receiver accounts must be different")]
    SameAccountTransfer {
        account_id: AccountId
    },
    #[error("{operation} amount must be greater than 0")]
    InvalidAmount {
        operation: Operation
    },
    #[error("Insufficient balance")]
    InsufficientBalance {
        account_id: AccountId
    },
    #[error("Insufficient balance in sender account")]
    InsufficientSenderBalance {
        account_id: AccountId
    },
    #[error("Currency mismatch between account currency and money sent currency")]
    CurrencyMismatch {
        account_id: AccountId
    },
    #[error("Balance overflow")]
    Overflow {
        account_id: AccountId
    },
    #[error("Ledger service is unavailable")]
    Unavailable
}
