//! Shared Diesel error classification for the repositories.
//!
//! This is the storage half of the error pipeline: client-caused database
//! failures (reference violations, invalid value syntax) become
//! [`RepositoryError::BadInput`] and eventually a 400; connectivity
//! problems become [`RepositoryError::Connection`]; everything else stays
//! an opaque query failure.

use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool errors to repository connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    RepositoryError::connection(message)
}

fn is_invalid_text_representation(message: &str) -> bool {
    // Postgres SQLSTATE 22P02 surfaces through Diesel as an unknown
    // database error kind; the message is the stable part.
    message.contains("invalid input syntax")
}

/// Map Diesel errors to repository errors.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(kind, info) => match kind {
            DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation => {
                RepositoryError::bad_input(info.message().to_owned())
            }
            DatabaseErrorKind::ClosedConnection => {
                RepositoryError::connection("database connection error")
            }
            _ if is_invalid_text_representation(info.message()) => {
                RepositoryError::bad_input(info.message().to_owned())
            }
            _ => RepositoryError::query("database error"),
        },
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        _ => RepositoryError::query("database error"),
    }
}
