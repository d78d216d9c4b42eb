use std::sync::Arc;

use tracing::{info, warn};

use crate::dto::{
    CreateUserRequest, DepositReceipt, DepositRequest, GetBalanceRequest, SendMoneyRequest,
    TransferReceipt, UserProfile, WithdrawRequest, WithdrawalReceipt
};
use crate::models::{Account, LedgerError, Transaction, TransactionType, User};
use crate::storage::Storage;
use crate::types::{AccountId, Money};

/// The account and transaction ledger.
///
/// Every operation follows the same sequence: check the request, look up the
/// referenced accounts, let the account apply its balance rules, then save the
/// accounts and append the transaction records. Nothing is written until all
/// checks have passed. Operations take `&mut self` so that a single owner
/// serializes them.
pub struct Ledger<S: Storage> {
    storage: Arc<S>
}

impl<S: Storage> Ledger<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// Registers a user and opens their account with a zero balance.
    pub fn create_user(&mut self, request: CreateUserRequest) -> Result<UserProfile, LedgerError> {
        if !request.has_required_fields() {
            return Err(rejected(LedgerError::MissingFields))
        }

        if self.storage.find_user_by_email_or_id_number(&request.email, &request.id_number).is_some() {
            return Err(rejected(LedgerError::UserExists))
        }

        let account = Account::new(self.storage.next_account_id(), request.account_currency.clone());
        let user = User::new(self.storage.next_user_id(), &account, request);

        info!(
            "User created: {} {} with account ID: {}",
            user.details.first_name, user.details.last_name, account.account_id
        );

        self.storage.save_account(account.clone());
        self.storage.save_user(user.clone());

        Ok(UserProfile::new(user, account))
    }

    pub fn deposit(&mut self, request: DepositRequest) -> Result<DepositReceipt, LedgerError> {
        let mut account = self.find_account(request.account_id)
            .ok_or_else(|| rejected(LedgerError::AccountNotFound { account_id: request.account_id }))?;

        account.deposit(&request.money).map_err(rejected)?;

        let transaction = self.record(TransactionType::Deposit, &account, &request.money, &request.description);
        let transaction_summary = format!("Deposited {}. {}", request.money, request.description);

        info!("Deposit successful: {} to account {}", request.money, account.account_id);

        let account_balance = account.account_balance.clone();
        self.storage.save_account(account);

        Ok(DepositReceipt {
            transaction_id: transaction.transaction_id,
            account_balance,
            transaction_summary
        })
    }

    pub fn withdraw(&mut self, request: WithdrawRequest) -> Result<WithdrawalReceipt, LedgerError> {
        let mut account = self.find_account(request.account_id)
            .ok_or_else(|| rejected(LedgerError::AccountNotFound { account_id: request.account_id }))?;

        account.withdraw(&request.money).map_err(rejected)?;

        let transaction = self.record(TransactionType::Withdrawal, &account, &request.money, &request.withdrawal_summary);
        let description = if request.withdrawal_summary.is_empty() {
            format!("Withdrawn {}", request.money)
        } else {
            request.withdrawal_summary
        };

        info!("Withdrawal successful: {} from account {}", request.money, account.account_id);

        let account_balance = account.account_balance.clone();
        self.storage.save_account(account);

        Ok(WithdrawalReceipt {
            transaction_id: transaction.transaction_id,
            account_balance,
            description
        })
    }

    pub fn get_balance(&self, request: GetBalanceRequest) -> Result<Money, LedgerError> {
        let account = self.find_account(request.account_id)
            .ok_or_else(|| rejected(LedgerError::AccountNotFound { account_id: request.account_id }))?;

        info!("Balance inquiry for account {}: {}", account.account_id, account.account_balance);

        Ok(account.account_balance)
    }

    /// Moves funds between two distinct accounts and records one leg on each.
    ///
    /// The returned transaction id identifies the transfer as a whole; each leg
    /// gets its own id and points back to it through `transfer_id`.
    pub fn send_money(&mut self, request: SendMoneyRequest) -> Result<TransferReceipt, LedgerError> {
        let mut sender = self.find_account(request.sender_account_id)
            .ok_or_else(|| rejected(LedgerError::SenderNotFound { account_id: request.sender_account_id }))?;

        let mut receiver = self.find_account(request.receiver_account_id)
            .ok_or_else(|| rejected(LedgerError::ReceiverNotFound { account_id: request.receiver_account_id }))?;

        if sender.account_id == receiver.account_id {
            return Err(rejected(LedgerError::SameAccountTransfer { account_id: sender.account_id }))
        }

        sender.transfer_to(&mut receiver, &request.money).map_err(rejected)?;

        let transfer_id = self.storage.next_transaction_id();

        let transfer_out = Transaction::new(
            self.storage.next_transaction_id(),
            TransactionType::TransferOut,
            sender.account_id,
            &request.money,
            request.description.clone()
        ).with_counterparty(receiver.account_id, transfer_id);

        let transfer_in = Transaction::new(
            self.storage.next_transaction_id(),
            TransactionType::TransferIn,
            receiver.account_id,
            &request.money,
            request.description
        ).with_counterparty(sender.account_id, transfer_id);

        self.storage.record(transfer_out);
        self.storage.record(transfer_in);

        info!(
            "Money transfer successful: {} from account {} to {}",
            request.money, sender.account_id, receiver.account_id
        );

        let receipt = TransferReceipt {
            sender_new_balance: sender.account_balance.clone(),
            receiver_new_balance: receiver.account_balance.clone(),
            transaction_id: transfer_id.to_string()
        };

        self.storage.save_account(sender);
        self.storage.save_account(receiver);

        Ok(receipt)
    }

    fn find_account(&self, account_id: AccountId) -> Option<Account> {
        self.storage.find_account(account_id)
    }

    fn record(&self, transaction_type: TransactionType, account: &Account, money: &Money, description: &str) -> Transaction {
        let transaction = Transaction::new(
            self.storage.next_transaction_id(),
            transaction_type,
            account.account_id,
            money,
            description
        );

        self.storage.record(transaction.clone());
        transaction
    }
}

fn rejected(error: LedgerError) -> LedgerError {
    warn!("Request rejected: {error} ({error:?})");
    error
}
