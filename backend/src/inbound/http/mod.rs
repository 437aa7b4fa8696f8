//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
mod payload;
pub mod state;
pub mod users;
pub mod validation;

pub use error::{ApiResult, ErrorBody};
