//! Implements a JSON file backed snapshot store.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{Error, models::Transaction, stores::SnapshotStore};

/// Stores the transaction snapshot as a JSON array in a single file.
///
/// Each record is written with the fields `id`, `amount`, `date`,
/// `description`, `type` and `category`, so the file can be inspected and
/// edited by hand. The whole array is rewritten on every save.
#[derive(Clone, Debug)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a backend that reads and writes the file at `path`.
    ///
    /// The file is not touched until the first load or save; a missing file
    /// simply means no snapshot has been written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the snapshot is kept in.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Option<Vec<Transaction>>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)
            .map_err(|error| Error::SnapshotRead(error.to_string()))?;
        let transactions =
            serde_json::from_str(&text).map_err(|error| Error::SnapshotRead(error.to_string()))?;

        Ok(Some(transactions))
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        let text = serde_json::to_string(transactions)
            .map_err(|error| Error::SnapshotWrite(error.to_string()))?;

        fs::write(&self.path, text).map_err(|error| Error::SnapshotWrite(error.to_string()))
    }
}

#[cfg(test)]
mod json_snapshot_store_tests {
    use std::{env, fs, path::PathBuf};

    use time::macros::date;
    use uuid::Uuid;

    use crate::{
        Error,
        models::{Category, NewTransaction, Transaction, TransactionId, TransactionKind},
        stores::SnapshotStore,
    };

    use super::JsonSnapshotStore;

    fn temp_snapshot_path() -> PathBuf {
        env::temp_dir().join(format!("pocketbook-test-{}.json", Uuid::new_v4()))
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            NewTransaction::new(
                20.0,
                date!(2024 - 03 - 01),
                "coffee",
                TransactionKind::Expense {
                    category: Category::Food,
                },
            )
            .unwrap()
            .finalise(TransactionId::random()),
            NewTransaction::new(
                1000.0,
                date!(2024 - 03 - 05),
                "salary",
                TransactionKind::Income { category: None },
            )
            .unwrap()
            .finalise(TransactionId::random()),
            NewTransaction::new(
                55.5,
                date!(2024 - 04 - 12),
                "power bill",
                TransactionKind::Expense {
                    category: Category::Utilities,
                },
            )
            .unwrap()
            .finalise(TransactionId::random()),
        ]
    }

    #[test]
    fn load_returns_none_when_the_file_does_not_exist() {
        let store = JsonSnapshotStore::new(temp_snapshot_path());

        assert_eq!(store.load(), Ok(None));
    }

    #[test]
    fn save_then_load_round_trips_every_record() {
        let path = temp_snapshot_path();
        let mut store = JsonSnapshotStore::new(&path);
        let transactions = sample_transactions();

        store.save(&transactions).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, Some(transactions));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_replaces_the_previous_snapshot() {
        let path = temp_snapshot_path();
        let mut store = JsonSnapshotStore::new(&path);
        let transactions = sample_transactions();

        store.save(&transactions).unwrap();
        store.save(&transactions[..1]).unwrap();

        assert_eq!(store.load().unwrap(), Some(transactions[..1].to_vec()));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_fails_on_a_corrupt_file() {
        let path = temp_snapshot_path();
        fs::write(&path, "definitely not json").unwrap();
        let store = JsonSnapshotStore::new(&path);

        let result = store.load();

        assert!(matches!(result, Err(Error::SnapshotRead(_))));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_reads_snapshots_written_by_other_tools() {
        let path = temp_snapshot_path();
        fs::write(
            &path,
            r#"[{"id":"imported-1","amount":15.0,"date":"2024-01-02","description":"bus fare","type":"expense","category":"transportation"}]"#,
        )
        .unwrap();
        let store = JsonSnapshotStore::new(&path);

        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id().as_str(), "imported-1");
        assert_eq!(loaded[0].category(), Some(Category::Transportation));

        fs::remove_file(&path).unwrap();
    }
}
