use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{LedgerError, Operation};
use crate::types::{AccountId, Money};

/// Represents the balance of a single user account.
///
/// Balance rules live here: every mutation validates the submitted amount
/// against the account before touching `account_balance`, so a rejected
/// request leaves the account unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Sequentially assigned identifier.
    pub account_id: AccountId,
    /// Current balance, always denominated in the currency the account was opened with.
    pub account_balance: Money
}

impl Account {
    /// Opens an empty account in the given currency.
    pub fn new(account_id: AccountId, currency_code: impl Into<String>) -> Self {
        Self {
            account_id,
            account_balance: Money::zero(currency_code)
        }
    }

    pub fn currency(&self) -> &str {
        &self.account_balance.currency_code
    }

    /// Credits a deposit to the account.
    ///
    /// # Errors
    /// Returns `LedgerError` if:
    /// - The amount is not greater than zero.
    /// - The currency differs from the account currency.
    /// - The new balance would overflow.
    pub fn deposit(&mut self, money: &Money) -> Result<(), LedgerError> {
        ensure_positive(money, Operation::Deposit)?;
        self.ensure_currency(money)?;

        self.account_balance = self.credited(money.amount)?;

        Ok(())
    }

    /// Debits a withdrawal from the account.
    ///
    /// Only deposits are currency checked; the amount is debited as submitted.
    ///
    /// # Errors
    /// Returns `LedgerError` if:
    /// - The amount is not greater than zero.
    /// - The balance is lower than the amount.
    pub fn withdraw(&mut self, money: &Money) -> Result<(), LedgerError> {
        ensure_positive(money, Operation::Withdrawal)?;

        if self.account_balance.amount < money.amount {
            return Err(LedgerError::InsufficientBalance { account_id: self.account_id })
        }

        self.account_balance = self.debited(money.amount)?;

        Ok(())
    }

    /// Moves funds from this account to `receiver`.
    ///
    /// Both new balances are computed before either account is updated, so
    /// the pair is either fully applied or left untouched.
    ///
    /// # Errors
    /// Returns `LedgerError` if:
    /// - The amount is not greater than zero.
    /// - The sender balance is lower than the amount.
    /// - The receiver balance would overflow.
    pub fn transfer_to(&mut self, receiver: &mut Account, money: &Money) -> Result<(), LedgerError> {
        ensure_positive(money, Operation::Transfer)?;

        if self.account_balance.amount < money.amount {
            return Err(LedgerError::InsufficientSenderBalance { account_id: self.account_id })
        }

        let sender_balance = self.debited(money.amount)?;
        let receiver_balance = receiver.credited(money.amount)?;

        self.account_balance = sender_balance;
        receiver.account_balance = receiver_balance;

        Ok(())
    }

    fn ensure_currency(&self, money: &Money) -> Result<(), LedgerError> {
        if !money.is_in(self.currency()) {
            return Err(LedgerError::CurrencyMismatch { account_id: self.account_id })
        }

        Ok(())
    }

    fn credited(&self, amount: Decimal) -> Result<Money, LedgerError> {
        self.account_balance.checked_add(amount)
            .ok_or(LedgerError::Overflow { account_id: self.account_id })
    }

    fn debited(&self, amount: Decimal) -> Result<Money, LedgerError> {
        self.account_balance.checked_sub(amount)
            .ok_or(LedgerError::Overflow { account_id: self.account_id })
    }
}

fn ensure_positive(money: &Money, operation: Operation) -> Result<(), LedgerError> {
    if !money.is_positive() {
        return Err(LedgerError::InvalidAmount { operation })
    }

    Ok(())
}
