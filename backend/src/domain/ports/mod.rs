//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`RegistrationService`], [`LoginService`], [`UsersQuery`])
//! are called by inbound adapters. The driven [`UserRepository`] port is
//! implemented by outbound persistence adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod registration_service;
mod user_repository;
mod users_query;

pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use registration_service::MockRegistrationService;
#[cfg(test)]
pub use user_repository::{InMemoryUserRepository, MockUserRepository};
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
