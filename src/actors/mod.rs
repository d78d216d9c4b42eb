mod ledger_actor;

pub use ledger_actor::{LedgerActor, LedgerHandle};
