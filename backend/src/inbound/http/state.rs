//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::AccountService;
use crate::domain::ports::{LoginService, RegistrationService, UserRepository, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Account creation.
    pub registration: Arc<dyn RegistrationService>,
    /// Credential checks.
    pub login: Arc<dyn LoginService>,
    /// Lookup by identifier.
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state from individual port implementations.
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        login: Arc<dyn LoginService>,
        users: Arc<dyn UsersQuery>,
    ) -> Self {
        Self {
            registration,
            login,
            users,
        }
    }

    /// Wire every port to one [`AccountService`] over `repository`.
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: UserRepository + 'static,
    {
        let service = Arc::new(AccountService::new(repository));
        Self::new(service.clone(), service.clone(), service)
    }
}
