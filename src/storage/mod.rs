mod memory_storage;

use crate::models::{Account, Transaction, User};
use crate::types::{AccountId, TransactionId, UserId};

pub use memory_storage::MemoryStorage;

/// Backing collections for users, accounts and the transaction log.
///
/// Identifier counters start at 1 and never hand out the same value twice.
pub trait Storage: Send + Sync + 'static {
    fn next_user_id(&self) -> UserId;
    fn next_account_id(&self) -> AccountId;
    fn next_transaction_id(&self) -> TransactionId;

    fn find_account(&self, account_id: AccountId) -> Option<Account>;
    fn save_account(&self, account: Account);
    /// All accounts ordered by identifier.
    fn accounts(&self) -> Vec<Account>;

    fn find_user_by_email_or_id_number(&self, email: &str, id_number: &str) -> Option<User>;
    fn save_user(&self, user: User);

    fn record(&self, transaction: Transaction);
    /// Transactions touching `account_id`, oldest first.
    fn transactions_for(&self, account_id: AccountId) -> Vec<Transaction>;
}
