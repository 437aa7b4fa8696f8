//! Authentication primitives: passwords, digests, and validated request input.
//!
//! Inbound adapters hand raw optional strings to the constructors here; the
//! account service only ever sees validated values.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::{Email, Username};

/// Plaintext password supplied by a client.
///
/// The buffer is zeroed when dropped and `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a plaintext password.
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self(Zeroizing::new(plaintext.into()))
    }

    /// Borrow the plaintext.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Lowercase hex SHA-256 digest of a password, as persisted.
///
/// # Examples
/// ```
/// use user_service::domain::{Password, PasswordDigest};
///
/// let digest = PasswordDigest::of(&Password::new("secret"));
/// assert_eq!(
///     digest.as_str(),
///     "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Length of the hex encoding.
    pub const HEX_LEN: usize = 64;

    /// Hash `password` with SHA-256 and hex-encode the result.
    #[must_use]
    pub fn of(password: &Password) -> Self {
        Self(hex::encode(Sha256::digest(password.expose().as_bytes())))
    }

    /// Hex digest string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PasswordDigest {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Registration payload fields that failed the presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    /// Username was absent or empty.
    #[error("username is required")]
    MissingUsername,
    /// Email was absent or empty.
    #[error("email is required")]
    MissingEmail,
    /// Password was absent or empty.
    #[error("password is required")]
    MissingPassword,
}

/// Validated registration input.
///
/// ## Invariants
/// - `username`, `email`, and `password` are all present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    email: Email,
    password: Password,
}

impl Registration {
    /// Validate presence of every field.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::{Registration, RegistrationValidationError};
    ///
    /// let ok = Registration::try_from_parts(Some("alice"), Some("a@x.com"), Some("secret"));
    /// assert!(ok.is_ok());
    ///
    /// let err = Registration::try_from_parts(Some("alice"), None, Some("secret")).unwrap_err();
    /// assert_eq!(err, RegistrationValidationError::MissingEmail);
    /// ```
    pub fn try_from_parts(
        username: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, RegistrationValidationError> {
        let username = username
            .and_then(|value| Username::new(value).ok())
            .ok_or(RegistrationValidationError::MissingUsername)?;
        let email = email
            .and_then(|value| Email::new(value).ok())
            .ok_or(RegistrationValidationError::MissingEmail)?;
        let password = password
            .filter(|value| !value.is_empty())
            .map(Password::new)
            .ok_or(RegistrationValidationError::MissingPassword)?;
        Ok(Self {
            username,
            email,
            password,
        })
    }

    /// Requested login name.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested contact address.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Plaintext password, hashed before storage.
    #[must_use]
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Login payload fields that were absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was absent or empty.
    #[error("username is required")]
    MissingUsername,
    /// Password was absent.
    #[error("password is required")]
    MissingPassword,
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is non-empty and kept verbatim for exact matching.
/// - `password` is present; an empty password is allowed through and simply
///   never matches a stored digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Password,
}

impl LoginCredentials {
    /// Construct credentials from raw optional inputs.
    pub fn try_from_parts(
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, LoginValidationError> {
        let username = username
            .and_then(|value| Username::new(value).ok())
            .ok_or(LoginValidationError::MissingUsername)?;
        let password = password
            .map(Password::new)
            .ok_or(LoginValidationError::MissingPassword)?;
        Ok(Self { username, password })
    }

    /// Username for the exact-match lookup.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password supplied by the caller.
    #[must_use]
    pub fn password(&self) -> &Password {
        &self.password
    }
}
