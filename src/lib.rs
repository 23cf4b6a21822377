//! Pocketbook is the storage and aggregation core of a personal finance
//! tracker.
//!
//! It records income and expense transactions, keeps them synchronized to a
//! persisted snapshot on every change, and derives the summary data (totals,
//! balance, monthly series, category breakdown) that a display layer turns
//! into cards and charts.
//!
//! The pieces fit together like this:
//!
//! - [TransactionStore] owns the transaction list and persists it through an
//!   injected [SnapshotStore] backend ([JsonSnapshotStore] for a data file,
//!   [InMemorySnapshotStore] for ephemeral use).
//! - [NewTransaction] validates user input before it reaches the store.
//! - The [aggregation] functions compute read-only summaries from
//!   [TransactionStore::list].
//!
//! ```no_run
//! use pocketbook::{
//!     Category, JsonSnapshotStore, NewTransaction, TransactionKind, TransactionStore, balance,
//!     parse_date,
//! };
//!
//! # fn main() -> Result<(), pocketbook::Error> {
//! let mut store = TransactionStore::load(JsonSnapshotStore::new("transactions.json"));
//!
//! store.add(NewTransaction::new(
//!     4.5,
//!     parse_date("2024-03-01")?,
//!     "coffee",
//!     TransactionKind::Expense {
//!         category: Category::Food,
//!     },
//! )?)?;
//!
//! println!("balance: {}", balance(store.list()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod aggregation;
mod error;
mod models;
mod stores;

pub use aggregation::{
    CategoryTotal, MonthlySummary, balance, group_by_category, group_by_month, total_for,
};
pub use error::Error;
pub use models::{
    Category, NewTransaction, Transaction, TransactionId, TransactionKind, TransactionType,
    parse_date,
};
pub use stores::{InMemorySnapshotStore, JsonSnapshotStore, SnapshotStore, TransactionStore};
