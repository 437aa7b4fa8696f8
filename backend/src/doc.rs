//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint and the request/response bodies
//! they exchange. The document backs Swagger UI in debug builds and is
//! exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::users::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "Account registration, login, and lookup over JSON."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        MessageResponse,
        LoginResponse,
        UserResponse,
        ErrorBody,
        HealthResponse
    )),
    tags(
        (name = "users", description = "Account operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
