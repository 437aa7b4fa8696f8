//! Startup schema creation.
//!
//! The table is created if absent and never migrated afterwards.

use diesel_async::SimpleAsyncConnection;
use tracing::info;

use super::connection::{ConnectionError, SqliteConnector};

const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL
)";

/// Errors raised while preparing the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No connection could be opened.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// The DDL statement failed.
    #[error("failed to create users table: {message}")]
    Ddl { message: String },
}

/// Create the `users` table through one scoped connection.
///
/// Idempotent: existing tables and rows are left untouched.
pub async fn ensure_schema(connector: &SqliteConnector) -> Result<(), SchemaError> {
    let mut conn = connector.connect().await?;
    conn.batch_execute(CREATE_USERS_TABLE)
        .await
        .map_err(|err| SchemaError::Ddl {
            message: err.to_string(),
        })?;
    info!(
        database = %connector.config().path().display(),
        "users schema ready"
    );
    Ok(())
}
