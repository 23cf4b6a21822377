//! This file defines the type `Transaction`, the core type of the
//! application, along with its identifier, kind and the validated input type
//! used to create one.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use uuid::Uuid;

use crate::{Error, models::Category};

/// The date layout used in the persisted snapshot, e.g. `2024-03-01`.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a date string in the `YYYY-MM-DD` layout used by the persisted
/// snapshot and by date form inputs.
///
/// # Errors
/// This function will return an [Error::InvalidDate] if `input` is not a
/// valid calendar date in that layout.
pub fn parse_date(input: &str) -> Result<Date, Error> {
    Date::parse(input, DATE_FORMAT).map_err(|_| Error::InvalidDate(input.to_owned()))
}

mod iso_date {
    //! Serde adapter pinning dates to the snapshot's `YYYY-MM-DD` layout.

    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::Date;

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date.format(DATE_FORMAT).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text, DATE_FORMAT).map_err(D::Error::custom)
    }
}

/// Uniquely identifies a transaction within the store.
///
/// Ids are opaque strings assigned by the store when a transaction is
/// created; callers never pick them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh, globally unique id.
    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The id as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a transaction records money earned or money spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

/// The kind of a transaction and the category data that goes with it.
///
/// Expenses always carry a category; income records may carry one for
/// information but it never contributes to expense summaries. Encoding the
/// rule in the variants makes an uncategorised expense unrepresentable.
///
/// Serializes into the snapshot's `type` and `category` fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. wages.
    Income {
        /// An informational category, kept when present so that snapshots
        /// written by other tools survive a load/save round trip.
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<Category>,
    },
    /// Money spent.
    Expense {
        /// The spending category the expense is summarised under.
        category: Category,
    },
}

impl TransactionKind {
    /// The income/expense discriminant of this kind.
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            TransactionKind::Income { .. } => TransactionType::Income,
            TransactionKind::Expense { .. } => TransactionType::Expense,
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// Transactions are created through
/// [TransactionStore::add](crate::TransactionStore::add), which assigns the
/// id. Records are immutable; replacing one goes through
/// [TransactionStore::update](crate::TransactionStore::update).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    amount: f64,
    #[serde(with = "iso_date")]
    date: Date,
    description: String,
    #[serde(flatten)]
    kind: TransactionKind,
}

impl Transaction {
    /// The id of the transaction.
    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    /// The amount of money spent or earned in this transaction.
    ///
    /// Always strictly positive; see [Transaction::transaction_type] for the
    /// direction.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// When the transaction happened.
    pub fn date(&self) -> Date {
        self.date
    }

    /// A text description of what the transaction was for.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The kind of the transaction and its category data.
    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    /// Whether the transaction records income or an expense.
    pub fn transaction_type(&self) -> TransactionType {
        self.kind.transaction_type()
    }

    /// The category attached to the transaction, if any.
    ///
    /// Expenses always have one; income records may.
    pub fn category(&self) -> Option<Category> {
        match self.kind {
            TransactionKind::Income { category } => category,
            TransactionKind::Expense { category } => Some(category),
        }
    }
}

/// A transaction that has not been given an id yet.
///
/// This is the input to [TransactionStore::add](crate::TransactionStore::add)
/// and [TransactionStore::update](crate::TransactionStore::update). The
/// constructor performs the field validation that the entry form would
/// otherwise enforce, so a `NewTransaction` always holds a valid record.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTransaction {
    amount: f64,
    date: Date,
    description: String,
    kind: TransactionKind,
}

impl NewTransaction {
    /// Create a validated transaction input.
    ///
    /// The description is trimmed before being stored.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NonPositiveAmount] if `amount` is not strictly greater than
    ///   zero,
    /// - or [Error::EmptyDescription] if `description` is empty after
    ///   trimming.
    pub fn new(
        amount: f64,
        date: Date,
        description: &str,
        kind: TransactionKind,
    ) -> Result<Self, Error> {
        if !(amount > 0.0) {
            return Err(Error::NonPositiveAmount(amount));
        }

        let description = description.trim();

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(Self {
            amount,
            date,
            description: description.to_owned(),
            kind,
        })
    }

    /// Turn the input into a full record with the given id.
    pub(crate) fn finalise(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            date: self.date,
            description: self.description,
            kind: self.kind,
        }
    }
}
