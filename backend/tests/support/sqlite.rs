//! Temporary SQLite databases for integration tests.

use std::path::{Path, PathBuf};

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use diesel::sqlite::SqliteConnection;
use tempfile::TempDir;
use user_service::outbound::persistence::{DatabaseConfig, SqliteConnector, ensure_schema};

/// A schema-initialised database file that is removed on drop.
pub struct TestDatabase {
    _dir: TempDir,
    path: PathBuf,
    connector: SqliteConnector,
}

impl TestDatabase {
    /// Create the file and the `users` table.
    pub async fn create() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("users.db");
        let connector = SqliteConnector::new(DatabaseConfig::new(&path));
        ensure_schema(&connector).await.expect("schema created");
        Self {
            _dir: dir,
            path,
            connector,
        }
    }

    /// Connector pointing at this database.
    pub fn connector(&self) -> SqliteConnector {
        self.connector.clone()
    }

    /// Database file path.
    #[allow(dead_code, reason = "not every suite inspects the file directly")]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw `password` column for `username`, bypassing the repository.
    #[allow(dead_code, reason = "not every suite inspects stored digests")]
    pub fn stored_password(&self, username: &str) -> Option<String> {
        self.raw_connection()
            .and_then(|mut conn| {
                diesel::sql_query("SELECT password FROM users WHERE username = ?")
                    .bind::<Text, _>(username)
                    .get_result::<PasswordRow>(&mut conn)
                    .optional()
                    .ok()
            })
            .flatten()
            .map(|row| row.password)
    }

    /// Number of rows in `users`.
    #[allow(dead_code, reason = "not every suite counts rows")]
    pub fn user_count(&self) -> i64 {
        let mut conn = self.raw_connection().expect("raw connection");
        diesel::sql_query("SELECT COUNT(*) AS count FROM users")
            .get_result::<CountRow>(&mut conn)
            .expect("count query")
            .count
    }

    fn raw_connection(&self) -> Option<SqliteConnection> {
        let url = self.path.to_string_lossy();
        SqliteConnection::establish(&url).ok()
    }
}

#[derive(QueryableByName)]
struct PasswordRow {
    #[diesel(sql_type = Text)]
    password: String,
}

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    count: i64,
}
