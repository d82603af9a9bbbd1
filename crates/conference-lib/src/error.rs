//! A module containing the [`ConferenceError`] enum, the error type of this crate.

use sea_orm::TransactionError;

use crate::EntityKind;

/// Represents any type of error that could happen when using this crate.
#[derive(thiserror::Error, Debug)]
#[rustfmt::skip]
pub enum ConferenceError {
    // --------
    // --- Internal server errors
    // --------

    /// An error from the database.
    #[error(transparent)]
    DbError(#[from] sea_orm::DbErr),

    // --------
    // --- Logical errors
    // --------

    /// No row of the entity kind has the provided ID.
    #[error("{0} with id `{1}` not found")]
    NotFound(
        /// The kind of the missing entity.
        EntityKind,
        /// The requested ID.
        i32,
    ),
}

impl<E> From<TransactionError<E>> for ConferenceError
where
    ConferenceError: From<E>,
{
    fn from(value: TransactionError<E>) -> Self {
        match value {
            TransactionError::Connection(db_err) => From::from(db_err),
            TransactionError::Transaction(e) => From::from(e),
        }
    }
}

/// Represents the result of a computation that could return a [`ConferenceError`].
pub type ConferenceResult<T = ()> = Result<T, ConferenceError>;
