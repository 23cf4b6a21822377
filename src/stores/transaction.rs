//! Defines the transaction store, the single source of truth for the
//! transaction list.

use crate::{
    Error,
    models::{NewTransaction, Transaction, TransactionId},
    stores::SnapshotStore,
};

/// Owns the authoritative in-memory transaction list and keeps the persisted
/// snapshot never more than one mutation stale.
///
/// Every mutation applies to the in-memory list first and then rewrites the
/// full snapshot synchronously. A failed write propagates to the caller while
/// the list keeps the attempted change, so persistence is best effort rather
/// than transactional.
///
/// Mutations take `&mut self`, so they are applied atomically and in the
/// order received even when the store is shared behind a lock.
#[derive(Clone, Debug)]
pub struct TransactionStore<S> {
    snapshot: S,
    transactions: Vec<Transaction>,
}

impl<S: SnapshotStore> TransactionStore<S> {
    /// Create a store by loading the persisted snapshot from `snapshot`.
    ///
    /// A backend with no snapshot yields an empty store. A snapshot that
    /// cannot be read or parsed also yields an empty store, with a warning
    /// logged; the store never invents data and never fails to start over a
    /// bad file.
    pub fn load(snapshot: S) -> Self {
        let transactions = match snapshot.load() {
            Ok(Some(transactions)) => transactions,
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!("starting with an empty transaction list: {error}");
                Vec::new()
            }
        };

        Self {
            snapshot,
            transactions,
        }
    }

    /// Create a new transaction in the store.
    ///
    /// The store assigns a fresh unique id, appends the record to the list
    /// and rewrites the snapshot. The created record is returned.
    ///
    /// # Errors
    /// This function will return an [Error::SnapshotWrite] if the snapshot
    /// could not be persisted; the record is still in the list.
    pub fn add(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = new_transaction.finalise(TransactionId::random());
        self.transactions.push(transaction.clone());
        self.persist()?;

        Ok(transaction)
    }

    /// Replace the transaction with the given `id`, keeping the id.
    ///
    /// Updating an id that is not in the store is a silent no-op. The
    /// snapshot is rewritten afterward either way.
    ///
    /// # Errors
    /// This function will return an [Error::SnapshotWrite] if the snapshot
    /// could not be persisted; the list still reflects the update.
    pub fn update(
        &mut self,
        id: &TransactionId,
        new_transaction: NewTransaction,
    ) -> Result<(), Error> {
        if let Some(existing) = self.transactions.iter_mut().find(|t| t.id() == id) {
            *existing = new_transaction.finalise(id.clone());
        }

        self.persist()
    }

    /// Remove the transaction with the given `id`, if present.
    ///
    /// Deleting an id that is not in the store is a silent no-op. The
    /// snapshot is rewritten afterward either way.
    ///
    /// # Errors
    /// This function will return an [Error::SnapshotWrite] if the snapshot
    /// could not be persisted; the list still reflects the deletion.
    pub fn delete(&mut self, id: &TransactionId) -> Result<(), Error> {
        self.transactions.retain(|t| t.id() != id);

        self.persist()
    }

    /// The current transaction list, in insertion order.
    ///
    /// Display ordering such as newest-first is left to the caller.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    fn persist(&mut self) -> Result<(), Error> {
        self.snapshot.save(&self.transactions)
    }
}
