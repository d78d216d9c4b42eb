mod ledger_service;

pub use ledger_service::Ledger;
