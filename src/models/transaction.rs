use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TransactionType;
use crate::types::{AccountId, Money, TransactionId};

/// A single entry in the transaction log.
///
/// Transfers produce two entries, one per account, linked by `transfer_id`.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub transaction_type: TransactionType,
    pub account_id: AccountId,
    pub amount: Decimal,
    pub currency_code: String,
    pub description: String,
    /// The other side of a transfer.
    pub counterparty_account_id: Option<AccountId>,
    pub transfer_id: Option<TransactionId>,
    pub timestamp: DateTime<Utc>
}

impl Transaction {
    pub fn new(
        transaction_id: TransactionId,
        transaction_type: TransactionType,
        account_id: AccountId,
        money: &Money,
        description: impl Into<String>
    ) -> Self {
        Self {
            transaction_id,
            transaction_type,
            account_id,
            amount: money.amount,
            currency_code: money.currency_code.clone(),
            description: description.into(),
            counterparty_account_id: None,
            transfer_id: None,
            timestamp: Utc::now()
        }
    }

    pub fn with_counterparty(mut self, account_id: AccountId, transfer_id: TransactionId) -> Self {
        self.counterparty_account_id = Some(account_id);
        self.transfer_id = Some(transfer_id);
        self
    }
}
