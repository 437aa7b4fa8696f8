//! Driving port for user lookups.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading a single account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch the account with `id`, failing with
    /// [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}
