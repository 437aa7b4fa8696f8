//! Driving port for login/authentication use-cases.
//!
//! Handlers authenticate through this port so their tests can substitute a
//! double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the matching account.
    ///
    /// Unknown usernames and wrong passwords fail identically with
    /// [`crate::domain::ErrorCode::InvalidCredentials`].
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
