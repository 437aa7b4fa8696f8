//! Domain primitives, ports, and services.
//!
//! Purpose: define strongly typed account entities used by the HTTP and
//! persistence adapters, plus the ports through which they talk to the
//! domain. Types are immutable once validated.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure taxonomy.
//! - User, Username, Email, UserId: the account model.
//! - Registration, LoginCredentials, Password, PasswordDigest: request input.
//! - AccountService: implementation of the driving ports.

pub mod account_service;
pub mod auth;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, Password, PasswordDigest, Registration,
    RegistrationValidationError,
};
pub use self::error::{Error, ErrorCode, messages};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, NewUser, User, UserId, UserValidationError, Username};
