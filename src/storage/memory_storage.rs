use crate::models::{Account, Transaction, User};
use crate::storage::Storage;
use crate::types::{AccountId, TransactionId, UserId};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct MemoryStorage {
    users: DashMap<UserId, User>,
    accounts: DashMap<AccountId, Account>,
    transactions: DashMap<TransactionId, Transaction>,
    next_user_id: AtomicU64,
    next_account_id: AtomicU64,
    next_transaction_id: AtomicU64
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            accounts: DashMap::new(),
            transactions: DashMap::new(),
            next_user_id: AtomicU64::new(1),
            next_account_id: AtomicU64::new(1),
            next_transaction_id: AtomicU64::new(1)
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn next_user_id(&self) -> UserId {
        self.next_user_id.fetch_add(1, Ordering::Relaxed)
    }

    fn next_account_id(&self) -> AccountId {
        self.next_account_id.fetch_add(1, Ordering::Relaxed)
    }

    fn next_transaction_id(&self) -> TransactionId {
        self.next_transaction_id.fetch_add(1, Ordering::Relaxed)
    }

    fn find_account(&self, account_id: AccountId) -> Option<Account> {
        self.accounts.get(&account_id).map(|item| item.value().clone())
    }

    fn save_account(&self, account: Account) {
        self.accounts.insert(account.account_id, account);
    }

    fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.iter()
            .map(|item| item.value().clone())
            .collect();

        accounts.sort_by_key(|account| account.account_id);
        accounts
    }

    fn find_user_by_email_or_id_number(&self, email: &str, id_number: &str) -> Option<User> {
        self.users.iter()
            .find(|item| item.value().conflicts_with(email, id_number))
            .map(|item| item.value().clone())
    }

    fn save_user(&self, user: User) {
        self.users.insert(user.person_id, user);
    }

    fn record(&self, transaction: Transaction) {
        self.transactions.insert(transaction.transaction_id, transaction);
    }

    fn transactions_for(&self, account_id: AccountId) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> = self.transactions.iter()
            .filter(|item| item.value().account_id == account_id)
            .map(|item| item.value().clone())
            .collect();

        transactions.sort_by_key(|transaction| transaction.transaction_id);
        transactions
    }
}
