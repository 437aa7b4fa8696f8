//! Driven port for account persistence.
//!
//! One method per storage statement. Adapters detect uniqueness conflicts at
//! insert time and report them as [`UserPersistenceError::DuplicateIdentity`];
//! callers never pre-check.

use async_trait::async_trait;

use crate::domain::{NewUser, PasswordDigest, User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Storage connection could not be opened or configured.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Statement failed during execution or row conversion.
        Query { message: String } => "user repository query failed: {message}",
        /// Username or email already taken.
        DuplicateIdentity => "username or email already exists",
    }
}

/// Storage capability backing the account service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and return it with its assigned identifier.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Find the account whose username and stored digest both match exactly.
    async fn find_by_credentials(
        &self,
        username: &Username,
        digest: &PasswordDigest,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}

#[cfg(test)]
pub use in_memory::InMemoryUserRepository;
