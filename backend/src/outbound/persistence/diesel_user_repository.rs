//! SQLite-backed `UserRepository` implementation using Diesel.
//!
//! Every method opens a scoped connection, runs exactly one statement, and
//! drops the connection before returning.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, PasswordDigest, User, UserId, Username};

use super::connection::SqliteConnector;
use super::diesel_basic_error_mapping::{map_connection_error, map_diesel_error};
use super::models::{NewUserRow, UserRow};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Debug, Clone)]
pub struct DieselUserRepository {
    connector: SqliteConnector,
}

impl DieselUserRepository {
    /// Create a repository that opens connections through `connector`.
    pub fn new(connector: SqliteConnector) -> Self {
        Self { connector }
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let id = row.id;
    User::try_from_parts(row.id, row.username, row.email).map_err(|err| {
        warn!(user_id = id, error = %err, "stored user row failed validation");
        UserPersistenceError::query("invalid user row")
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self
            .connector
            .connect()
            .await
            .map_err(map_connection_error)?;
        let row = NewUserRow {
            username: user.username().as_ref(),
            email: user.email().as_ref(),
            password: user.password_digest().as_str(),
        };
        let created = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_user(created)
    }

    async fn find_by_credentials(
        &self,
        username: &Username,
        digest: &PasswordDigest,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self
            .connector
            .connect()
            .await
            .map_err(map_connection_error)?;
        let row = users::table
            .filter(users::username.eq(username.as_ref()))
            .filter(users::password.eq(digest.as_str()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self
            .connector
            .connect()
            .await
            .map_err(map_connection_error)?;
        let row = users::table
            .filter(users::id.eq(id.get()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }
}
