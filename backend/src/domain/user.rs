//! User data model.
//!
//! Usernames and emails are only required to be present and non-empty. No
//! trimming, character-set, or format rules apply: the stored value is exactly
//! what the client sent.

use std::fmt;

use super::PasswordDigest;

/// Validation errors raised when building user components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Username was empty.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Email was empty.
    #[error("email must not be empty")]
    EmptyEmail,
}

/// Storage-assigned user identifier.
///
/// Identifiers increase monotonically and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! non_empty_string {
    ($(#[$meta:meta])* $name:ident, $error:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validate and construct from owned or borrowed input.
            pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(UserValidationError::$error);
                }
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = UserValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

non_empty_string!(
    /// Unique login name chosen at registration.
    Username,
    EmptyUsername
);

non_empty_string!(
    /// Unique contact address chosen at registration.
    Email,
    EmptyEmail
);

/// Registered account as exposed to callers.
///
/// ## Invariants
/// - Carries no password material; the digest never leaves persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
}

impl User {
    /// Build a user from validated components.
    #[must_use]
    pub fn new(id: UserId, username: Username, email: Email) -> Self {
        Self {
            id,
            username,
            email,
        }
    }

    /// Fallible constructor for raw row values.
    pub fn try_from_parts(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id),
            Username::new(username)?,
            Email::new(email)?,
        ))
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// Account record awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    email: Email,
    password_digest: PasswordDigest,
}

impl NewUser {
    /// Bundle the insert values.
    #[must_use]
    pub fn new(username: Username, email: Email, password_digest: PasswordDigest) -> Self {
        Self {
            username,
            email,
            password_digest,
        }
    }

    /// Login name to store.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Contact address to store.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Digest stored in place of the password.
    #[must_use]
    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }
}
