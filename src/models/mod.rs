//! Defines the domain models: transactions, their identifiers and kinds, and
//! the fixed category set.

mod category;
mod transaction;

pub use category::Category;
pub use transaction::{
    NewTransaction, Transaction, TransactionId, TransactionKind, TransactionType, parse_date,
};
