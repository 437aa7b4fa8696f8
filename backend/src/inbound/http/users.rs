//! Account API handlers.
//!
//! ```text
//! POST /api/users/register {"username":"alice","email":"a@x.com","password":"secret"}
//! POST /api/users/login {"username":"alice","password":"secret"}
//! GET /api/users/1
//! ```
//!
//! Each handler validates its input, makes one port call, and renders the
//! result. Failures flow through [`crate::domain::Error`] and its
//! `ResponseError` impl.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{
    Error, LoginCredentials, LoginValidationError, Registration, RegistrationValidationError,
    User, UserId, messages,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::payload::deserialize_object;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/users/register`.
///
/// Fields are optional at the decoding layer so an absent or falsy field is
/// reported as `Missing required fields` rather than a decode failure. The
/// body itself must be a JSON object.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct RegisterRequest {
    /// Requested login name.
    #[schema(example = "alice")]
    pub username: Option<String>,
    /// Contact address; format is not checked.
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    /// Plaintext password, hashed before storage.
    #[schema(example = "secret")]
    pub password: Option<String>,
}

impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [username, email, password] = deserialize_object(
            deserializer,
            "a registration object",
            ["username", "email", "password"],
        )?;
        Ok(Self {
            username,
            email,
            password,
        })
    }
}

impl TryFrom<&RegisterRequest> for Registration {
    type Error = RegistrationValidationError;

    fn try_from(value: &RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.username.as_deref(),
            value.email.as_deref(),
            value.password.as_deref(),
        )
    }
}

/// Login request body for `POST /api/users/login`.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct LoginRequest {
    /// Login name, matched exactly.
    #[schema(example = "alice")]
    pub username: Option<String>,
    /// Plaintext password.
    #[schema(example = "secret")]
    pub password: Option<String>,
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [username, password] =
            deserialize_object(deserializer, "a login object", ["username", "password"])?;
        Ok(Self { username, password })
    }
}

impl TryFrom<&LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: &LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.username.as_deref(), value.password.as_deref())
    }
}

/// Confirmation body for successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    #[schema(example = "User registered successfully")]
    pub message: String,
}

/// Body for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Human-readable confirmation.
    #[schema(example = "Login successful")]
    pub message: String,
    /// Identifier of the authenticated account.
    #[schema(example = 1)]
    pub user_id: i64,
    /// Login name of the authenticated account.
    #[schema(example = "alice")]
    pub username: String,
}

/// Public account record. Never carries password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Account identifier.
    #[schema(example = 1)]
    pub id: i64,
    /// Login name.
    #[schema(example = "alice")]
    pub username: String,
    /// Contact address.
    #[schema(example = "a@x.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            username: user.username().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Missing fields or malformed payload", body = ErrorBody),
        (status = 409, description = "Username or email already exists", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::try_from(&payload.into_inner()).map_err(|err| {
        debug!(reason = %err, "registration rejected");
        Error::missing_fields(messages::MISSING_FIELDS)
    })?;
    state.registration.register(&registration).await?;
    Ok(HttpResponse::Created().json(MessageResponse {
        message: "User registered successfully".to_owned(),
    }))
}

/// Authenticate a username and password.
///
/// A missing password is treated as a failed login; storage is not queried.
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Malformed payload", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = LoginCredentials::try_from(&payload.into_inner()).map_err(|err| {
        debug!(reason = %err, "login rejected before lookup");
        Error::invalid_credentials(messages::INVALID_CREDENTIALS)
    })?;
    let user = state.login.authenticate(&credentials).await?;
    Ok(web::Json(LoginResponse {
        message: "Login successful".to_owned(),
        user_id: user.id().get(),
        username: user.username().to_string(),
    }))
}

/// Fetch an account by identifier.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Account", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.find_user(UserId::new(id.into_inner())).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Mount the account routes under `/api/users`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use user_service::inbound::http::users;
///
/// let app = App::new().service(web::scope("/api/users").configure(users::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login).service(get_user);
}

#[cfg(test)]
mod tests;
