//! Defines the crate level error type.

/// The errors that may occur in the transaction store and its persistence
/// layer.
///
/// Note that updating or deleting a transaction that does not exist is a
/// silent no-op, not an error (see
/// [TransactionStore](crate::TransactionStore)).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A zero or negative amount was used to create a transaction.
    ///
    /// Amounts are magnitudes; whether money was earned or spent is carried
    /// by the transaction kind, never by the sign of the number.
    #[error("transaction amounts must be greater than zero, got {0}")]
    NonPositiveAmount(f64),

    /// An empty or whitespace-only string was used as a transaction
    /// description.
    #[error("transaction descriptions must not be empty")]
    EmptyDescription,

    /// A string could not be parsed as a calendar date.
    #[error("could not parse \"{0}\" as a date in the year-month-day format")]
    InvalidDate(String),

    /// A string did not name one of the fixed spending categories.
    #[error("\"{0}\" is not a spending category")]
    UnknownCategory(String),

    /// The persisted transaction snapshot exists but could not be read or
    /// deserialized.
    ///
    /// The store absorbs this error on start-up and falls back to an empty
    /// list; it is only surfaced to callers that use a
    /// [SnapshotStore](crate::SnapshotStore) directly.
    #[error("could not read the transaction snapshot: {0}")]
    SnapshotRead(String),

    /// The transaction snapshot could not be serialized or written.
    ///
    /// Mutations propagate this error after applying the change in memory,
    /// so the caller can report the failure while the current state is kept.
    #[error("could not write the transaction snapshot: {0}")]
    SnapshotWrite(String),
}
