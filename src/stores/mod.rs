//! Contains the transaction store and the snapshot backends it persists
//! through.

mod json;
mod snapshot;
mod transaction;

pub use json::JsonSnapshotStore;
pub use snapshot::{InMemorySnapshotStore, SnapshotStore};
pub use transaction::TransactionStore;
