//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status code in one place and renders the message as the
//! client-facing `error` string, so messages here are part of the public
//! contract.

use std::fmt;

use super::TraceId;

/// Client-facing messages for the account error taxonomy.
pub mod messages {
    /// Registration payload lacked a username, email, or password.
    pub const MISSING_FIELDS: &str = "Missing required fields";
    /// Request body could not be decoded into the expected shape.
    pub const INVALID_PAYLOAD: &str = "Invalid request payload";
    /// Username or email collided with an existing account.
    pub const DUPLICATE_IDENTITY: &str = "Username or email already exists";
    /// Login did not match a stored account.
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
    /// No account exists for the requested identifier.
    pub const USER_NOT_FOUND: &str = "User not found";
    /// Generic body for any unexpected failure.
    pub const INTERNAL: &str = "Internal server error";
}

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request body is malformed or has the wrong shape.
    InvalidRequest,
    /// A required registration field is absent or empty.
    MissingFields,
    /// The username or email is already registered.
    DuplicateIdentity,
    /// Login credentials did not match any account.
    InvalidCredentials,
    /// The requested user does not exist.
    NotFound,
    /// An unexpected storage or runtime failure.
    InternalError,
}

/// Domain error payload.
///
/// Captures the ambient [`TraceId`] at construction so adapters can correlate
/// the response with request logs.
///
/// # Examples
/// ```
/// use user_service::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("User not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "User not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error carrying the current trace identifier, if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message rendered to clients (redacted for internal errors).
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured when the error was raised.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Override the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::MissingFields`].
    pub fn missing_fields(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingFields, message)
    }

    /// Convenience constructor for [`ErrorCode::DuplicateIdentity`].
    pub fn duplicate_identity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateIdentity, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidCredentials`].
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCredentials, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
