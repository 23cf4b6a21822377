//! Defines the persistence port that transaction snapshots are saved through.

use crate::{Error, models::Transaction};

/// Handles loading and saving the persisted copy of the transaction list.
///
/// The snapshot is a single slot: [SnapshotStore::save] replaces it
/// wholesale, there is no delta persistence. Implementations only move data;
/// policy such as falling back to an empty list on a corrupt snapshot lives
/// in [TransactionStore](crate::TransactionStore).
pub trait SnapshotStore {
    /// Read the persisted snapshot.
    ///
    /// Returns `None` when no snapshot has ever been written.
    ///
    /// # Errors
    /// This function will return an [Error::SnapshotRead] if the snapshot
    /// exists but could not be read or deserialized.
    fn load(&self) -> Result<Option<Vec<Transaction>>, Error>;

    /// Replace the persisted snapshot with `transactions`.
    ///
    /// # Errors
    /// This function will return an [Error::SnapshotWrite] if the snapshot
    /// could not be serialized or written.
    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error>;
}

/// Keeps the snapshot in process memory.
///
/// Nothing outlives the store itself, which makes this backend suitable for
/// tests and for sessions that do not need their data kept.
#[derive(Clone, Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshot: Option<Vec<Transaction>>,
}

impl InMemorySnapshotStore {
    /// Create a backend with no saved snapshot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<Vec<Transaction>>, Error> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        self.snapshot = Some(transactions.to_vec());

        Ok(())
    }
}
