//! Driving port for account registration.
//!
//! Inbound adapters call this port with validated input and never see how
//! the account is stored.

use async_trait::async_trait;

use crate::domain::{Error, Registration, User};

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create an account and return it with its assigned identifier.
    ///
    /// Fails with [`crate::domain::ErrorCode::DuplicateIdentity`] when the
    /// username or email is already taken.
    async fn register(&self, registration: &Registration) -> Result<User, Error>;
}
