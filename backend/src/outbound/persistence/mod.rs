//! SQLite persistence adapters using Diesel ORM.
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Scoped connections**: each call opens and drops its own connection
//!   through [`SqliteConnector`].
//! - **Strongly typed errors**: Diesel failures map to
//!   [`crate::domain::ports::UserPersistenceError`].
//!
//! # Example
//!
//! ```no_run
//! use user_service::outbound::persistence::{
//!     DatabaseConfig, DieselUserRepository, SqliteConnector, ensure_schema,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = SqliteConnector::new(DatabaseConfig::new("users.db"));
//! ensure_schema(&connector).await?;
//! let repo = DieselUserRepository::new(connector);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod bootstrap;
mod connection;
mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod models;
mod schema;

pub use bootstrap::{SchemaError, ensure_schema};
pub use connection::{ConnectionError, DatabaseConfig, DbConnection, SqliteConnector};
pub use diesel_user_repository::DieselUserRepository;
