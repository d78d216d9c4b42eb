mod account;
mod errors;
mod transaction;
mod user;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use account::Account;
pub use errors::LedgerError;
pub use transaction::Transaction;
pub use user::{User, UserDetails};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    TransferIn,
    TransferOut
}

/// The client-facing operation an amount was submitted to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Operation {
    Deposit,
    Withdrawal,
    Transfer
}

impl Display for Operation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Deposit => "Deposit",
            Operation::Withdrawal => "Withdrawal",
            Operation::Transfer => "Transfer"
        };

        formatter.write_str(label)
    }
}
