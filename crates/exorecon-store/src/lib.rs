//! exorecon store - SQLite persistence for the review workflow
//!
//! Provides:
//! - SQLite schema with a checksummed migrations framework
//! - `SqliteChangeStore`, the durable `ChangeStore`
//! - `SqliteAcceptedLedger`, a `WriteBack` that records accepted changes

pub mod change_store;
pub mod db;
pub mod errors;
pub mod ledger;
pub mod migrations;

// Re-export key types
pub use change_store::SqliteChangeStore;
pub use errors::Result;
pub use ledger::{AcceptedRecord, SqliteAcceptedLedger};
