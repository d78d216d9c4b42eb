/// The single task that owns the ledger and applies commands in order.
pub mod actors;

pub mod config;

/// Request and response shapes of the RPC contract.
pub mod dto;

/// Account, user and transfer operations with their validation rules.
pub mod ledger;

/// Domain types and the error taxonomy returned to clients.
pub mod models;

pub mod report;

/// HTTP routes exposing the ledger operations as JSON RPC methods.
pub mod rpc;

/// In-memory collections for users, accounts and the transaction log.
pub mod storage;

pub mod types;
