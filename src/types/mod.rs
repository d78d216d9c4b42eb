mod money;

pub use money::Money;

pub type UserId = u64;
pub type AccountId = u64;
pub type TransactionId = u64;
