//! Request and response shapes of the banking RPC contract.
//!
//! Requests default every absent field the way protobuf does (empty string,
//! zero, zero money) so validation, not deserialization, decides what is
//! missing.

use serde::{Deserialize, Serialize};

use crate::models::{Account, LedgerError, User, UserDetails};
use crate::types::{AccountId, Money, TransactionId, UserId};

pub type CreateUserRequest = UserDetails;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DepositRequest {
    pub money: Money,
    pub account_id: AccountId,
    pub description: String
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WithdrawRequest {
    pub money: Money,
    pub account_id: AccountId,
    pub withdrawal_summary: String
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetBalanceRequest {
    pub account_id: AccountId
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SendMoneyRequest {
    pub sender_account_id: AccountId,
    pub receiver_account_id: AccountId,
    pub money: Money,
    pub description: String
}

/// A created user as returned to the client: every submitted field plus the
/// assigned identifier and the opened account.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub person_id: UserId,
    #[serde(flatten)]
    pub details: UserDetails,
    pub account: Account
}

impl UserProfile {
    pub fn new(user: User, account: Account) -> Self {
        Self {
            person_id: user.person_id,
            details: user.details,
            account
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositReceipt {
    pub transaction_id: TransactionId,
    pub account_balance: Money,
    pub transaction_summary: String
}

#[derive(Debug, Clone, Serialize)]
pub struct WithdrawalReceipt {
    pub transaction_id: TransactionId,
    pub account_balance: Money,
    pub description: String
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub sender_new_balance: Money,
    pub receiver_new_balance: Money,
    pub transaction_id: String
}

/// Envelope shared by every method except `GetBalance`.
#[derive(Debug, Clone, Serialize)]
pub struct RpcReply<T> {
    pub error: String,
    pub data: Option<T>
}

impl<T> RpcReply<T> {
    pub fn success(data: T) -> Self {
        Self {
            error: String::new(),
            data: Some(data)
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            data: None
        }
    }
}

impl<T> From<Result<T, LedgerError>> for RpcReply<T> {
    fn from(result: Result<T, LedgerError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::failure(error.to_string())
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceReply {
    pub error: String,
    pub account_balance: Option<Money>
}

impl BalanceReply {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            account_balance: None
        }
    }
}

impl From<Result<Money, LedgerError>> for BalanceReply {
    fn from(result: Result<Money, LedgerError>) -> Self {
        match result {
            Ok(balance) => Self {
                error: String::new(),
                account_balance: Some(balance)
            },
            Err(error) => Self::failure(error.to_string())
        }
    }
}
