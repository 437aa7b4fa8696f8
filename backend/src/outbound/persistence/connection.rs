//! Scoped SQLite connections driven through `diesel-async`.
//!
//! Each repository call opens its own connection and drops it on return;
//! there is no pool. `SyncConnectionWrapper` runs the blocking SQLite work on
//! Tokio's blocking pool so handlers never stall the executor.
//!
//! Every connection sets `PRAGMA busy_timeout` so concurrent writers wait on
//! the file lock instead of failing with `SQLITE_BUSY`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use diesel::sqlite::SqliteConnection;
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};

/// Async SQLite connection type used by every adapter.
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

/// Errors raised while opening or configuring a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// The database file could not be opened.
    #[error("failed to open database: {message}")]
    Open { message: String },

    /// The connection opened but rejected its session settings.
    #[error("failed to configure connection: {message}")]
    Configure { message: String },
}

impl ConnectionError {
    /// Create an open error with the given message.
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open {
            message: message.into(),
        }
    }

    /// Create a configure error with the given message.
    pub fn configure(message: impl Into<String>) -> Self {
        Self::Configure {
            message: message.into(),
        }
    }
}

/// Location and session settings for the SQLite database.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use user_service::outbound::persistence::DatabaseConfig;
///
/// let config = DatabaseConfig::new("users.db").with_busy_timeout(Duration::from_millis(250));
/// assert_eq!(config.database_url(), "users.db");
/// assert_eq!(config.busy_timeout(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    path: PathBuf,
    busy_timeout: Duration,
}

impl DatabaseConfig {
    /// Default wait for a locked database before giving up.
    pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

    /// Configure a database stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Self::DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Set how long a connection waits on a locked database.
    #[must_use]
    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    /// Database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lock wait applied to each connection.
    pub fn busy_timeout(&self) -> Duration {
        self.busy_timeout
    }

    /// Connection string accepted by `SqliteConnection::establish`.
    pub fn database_url(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }
}

/// Opens configured connections on demand.
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    config: Arc<DatabaseConfig>,
}

impl SqliteConnector {
    /// Create a connector for `config`.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Settings this connector opens connections with.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Open a connection and apply the session settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Open`] when the file cannot be opened and
    /// [`ConnectionError::Configure`] when the pragma is rejected.
    pub async fn connect(&self) -> Result<DbConnection, ConnectionError> {
        let url = self.config.database_url();
        let mut conn = DbConnection::establish(&url)
            .await
            .map_err(|err| ConnectionError::open(err.to_string()))?;
        let pragma = format!(
            "PRAGMA busy_timeout = {};",
            self.config.busy_timeout().as_millis()
        );
        conn.batch_execute(&pragma)
            .await
            .map_err(|err| ConnectionError::configure(err.to_string()))?;
        Ok(conn)
    }
}
