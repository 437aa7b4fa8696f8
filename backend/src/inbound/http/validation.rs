//! Extractor configuration for inbound HTTP adapters.
//!
//! Actix rejects undecodable bodies and unparsable path segments before the
//! handler runs. These handlers turn those rejections into domain errors so
//! the response keeps the `{"error": ...}` shape.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::{Error, messages};

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request payload");
    Error::invalid_request(messages::INVALID_PAYLOAD).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected path parameter");
    Error::not_found(messages::USER_NOT_FOUND).into()
}

/// JSON extractor config mapping decode failures to `InvalidRequest`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Path extractor config mapping unparsable identifiers to `NotFound`.
///
/// The only typed path segment is the user id, so an id that is not an
/// integer, or is out of range, names no user.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}
