//! Account domain service.
//!
//! Implements the registration, login, and lookup driving ports on top of a
//! [`UserRepository`]. Passwords are hashed here so adapters only ever store
//! and compare digests.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    LoginService, RegistrationService, UserPersistenceError, UserRepository, UsersQuery,
};
use crate::domain::{
    Error, LoginCredentials, NewUser, PasswordDigest, Registration, User, UserId, messages,
};

/// Account service implementing every user-facing driving port.
#[derive(Debug)]
pub struct AccountService<R> {
    users: Arc<R>,
}

impl<R> Clone for AccountService<R> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<R> AccountService<R> {
    /// Create a service backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_persistence_error(operation: &'static str, err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::DuplicateIdentity => {
            Error::duplicate_identity(messages::DUPLICATE_IDENTITY)
        }
        other => {
            error!(operation, error = %other, "user repository failure");
            Error::internal(other.to_string())
        }
    }
}

#[async_trait]
impl<R> RegistrationService for AccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, registration: &Registration) -> Result<User, Error> {
        let new_user = NewUser::new(
            registration.username().clone(),
            registration.email().clone(),
            PasswordDigest::of(registration.password()),
        );
        let user = self
            .users
            .create(&new_user)
            .await
            .map_err(|err| map_persistence_error("register", err))?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<R> LoginService for AccountService<R>
where
    R: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let digest = PasswordDigest::of(credentials.password());
        self.users
            .find_by_credentials(credentials.username(), &digest)
            .await
            .map_err(|err| map_persistence_error("authenticate", err))?
            .ok_or_else(|| Error::invalid_credentials(messages::INVALID_CREDENTIALS))
    }
}

#[async_trait]
impl<R> UsersQuery for AccountService<R>
where
    R: UserRepository,
{
    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|err| map_persistence_error("find_user", err))?
            .ok_or_else(|| Error::not_found(messages::USER_NOT_FOUND))
    }
}
