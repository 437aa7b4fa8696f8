//! Shared Diesel error mapping for the user repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

use super::connection::ConnectionError;

/// Map connection failures into the port's connection variant.
pub(crate) fn map_connection_error(error: ConnectionError) -> UserPersistenceError {
    debug!(%error, "database connection failed");
    let message = match error {
        ConnectionError::Open { message } | ConnectionError::Configure { message } => message,
    };
    UserPersistenceError::connection(message)
}

/// Map Diesel errors into port errors.
///
/// Unique constraint violations become `DuplicateIdentity`; everything else
/// is a query or connection failure with a fixed, engine-free message.
pub(crate) fn map_diesel_error(error: DieselError) -> UserPersistenceError {
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
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::duplicate_identity()
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        _ => UserPersistenceError::query("database error"),
    }
}
