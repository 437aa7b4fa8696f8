//! User service library: account registration, login, and lookup over HTTP.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: account model, error taxonomy, ports, and the account service.
//! - [`inbound`]: actix-web handlers driving the domain ports.
//! - [`outbound`]: SQLite persistence behind the repository port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
