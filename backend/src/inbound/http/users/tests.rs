//! Handler tests for the account endpoints.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    InMemoryUserRepository, MockLoginService, MockRegistrationService, MockUsersQuery,
};
use crate::inbound::http::validation::{json_config, path_config};

#[fixture]
fn repo() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::default())
}

async fn init_app(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .app_data(path_config())
            .service(web::scope("/api/users").configure(configure)),
    )
    .await
}

async fn post_json<S>(app: &S, uri: &str, body: Value) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    let res = actix_test::call_service(app, req).await;
    let status = res.status();
    let body = actix_test::read_body_json(res).await;
    (status, body)
}

async fn get_json<S>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = actix_test::TestRequest::get().uri(uri).to_request();
    let res = actix_test::call_service(app, req).await;
    let status = res.status();
    let body = actix_test::read_body_json(res).await;
    (status, body)
}

fn alice() -> Value {
    json!({"username": "alice", "email": "a@x.com", "password": "secret"})
}

#[rstest]
#[actix_web::test]
async fn register_returns_created(repo: Arc<InMemoryUserRepository>) {
    let app = init_app(HttpState::from_repository(repo.clone())).await;

    let (status, body) = post_json(&app, "/api/users/register", alice()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "User registered successfully"}));
    assert_eq!(repo.len(), 1);
}

#[rstest]
#[case(json!({"email": "a@x.com", "password": "pw"}))]
#[case(json!({"username": "alice", "password": "pw"}))]
#[case(json!({"username": "alice", "email": "a@x.com"}))]
#[case(json!({"username": "", "email": "a@x.com", "password": "pw"}))]
#[case(json!({"username": "alice", "email": "", "password": "pw"}))]
#[case(json!({"username": "alice", "email": "a@x.com", "password": ""}))]
#[case(json!({"username": null, "email": "a@x.com", "password": "pw"}))]
#[case(json!({"username": 0, "email": "a@x.com", "password": "pw"}))]
#[case(json!({"username": "alice", "email": false, "password": "pw"}))]
#[case(json!({"username": "alice", "email": "a@x.com", "password": []}))]
#[case(json!({"username": "alice", "email": "a@x.com", "password": {}}))]
#[case(json!({}))]
#[actix_web::test]
async fn register_rejects_missing_fields(repo: Arc<InMemoryUserRepository>, #[case] body: Value) {
    let app = init_app(HttpState::from_repository(repo.clone())).await;

    let (status, body) = post_json(&app, "/api/users/register", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing required fields"}));
    assert_eq!(repo.len(), 0);
}

#[rstest]
#[case(json!({"username": "alice", "email": "other@x.com", "password": "pw"}))]
#[case(json!({"username": "other", "email": "a@x.com", "password": "pw"}))]
#[actix_web::test]
async fn register_rejects_duplicates(repo: Arc<InMemoryUserRepository>, #[case] body: Value) {
    let app = init_app(HttpState::from_repository(repo.clone())).await;
    post_json(&app, "/api/users/register", alice()).await;

    let (status, body) = post_json(&app, "/api/users/register", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "Username or email already exists"}));
    assert_eq!(repo.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn register_rejects_wrongly_typed_fields(repo: Arc<InMemoryUserRepository>) {
    let app = init_app(HttpState::from_repository(repo.clone())).await;

    let (status, body) = post_json(
        &app,
        "/api/users/register",
        json!({"username": 7, "email": "a@x.com", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid request payload"}));
    assert_eq!(repo.len(), 0);
}

#[rstest]
#[case(json!(["alice", "a@x.com", "secret"]))]
#[case(json!("alice"))]
#[case(json!(null))]
#[actix_web::test]
async fn register_requires_a_json_object(repo: Arc<InMemoryUserRepository>, #[case] body: Value) {
    let app = init_app(HttpState::from_repository(repo.clone())).await;

    let (status, body) = post_json(&app, "/api/users/register", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid request payload"}));
    assert_eq!(repo.len(), 0);
}

#[rstest]
#[actix_web::test]
async fn login_requires_a_json_object(repo: Arc<InMemoryUserRepository>) {
    let app = init_app(HttpState::from_repository(repo)).await;
    post_json(&app, "/api/users/register", alice()).await;

    let (status, body) = post_json(&app, "/api/users/login", json!(["alice", "secret"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid request payload"}));
}

#[rstest]
#[actix_web::test]
async fn register_hides_internal_failures() {
    let mut registration = MockRegistrationService::new();
    registration
        .expect_register()
        .times(1)
        .return_once(|_| Err(Error::internal("disk I/O error at /var/lib/users.db")));
    let state = HttpState::new(
        Arc::new(registration),
        Arc::new(MockLoginService::new()),
        Arc::new(MockUsersQuery::new()),
    );
    let app = init_app(state).await;

    let (status, body) = post_json(&app, "/api/users/register", alice()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[rstest]
#[actix_web::test]
async fn login_round_trip(repo: Arc<InMemoryUserRepository>) {
    let app = init_app(HttpState::from_repository(repo)).await;
    post_json(&app, "/api/users/register", alice()).await;

    let (status, body) = post_json(
        &app,
        "/api/users/login",
        json!({"username": "alice", "password": "secret"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Login successful", "user_id": 1, "username": "alice"})
    );
}

#[rstest]
#[case(json!({"username": "alice", "password": "wrong"}))]
#[case(json!({"username": "bob", "password": "secret"}))]
#[case(json!({"username": "alice", "password": ""}))]
#[case(json!({"username": "alice"}))]
#[case(json!({"username": "alice", "password": null}))]
#[case(json!({"password": "secret"}))]
#[actix_web::test]
async fn login_failures_are_uniform(repo: Arc<InMemoryUserRepository>, #[case] body: Value) {
    let app = init_app(HttpState::from_repository(repo)).await;
    post_json(&app, "/api/users/register", alice()).await;

    let (status, body) = post_json(&app, "/api/users/login", body).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid credentials"}));
}

#[rstest]
#[actix_web::test]
async fn login_without_password_skips_storage() {
    let mut login_service = MockLoginService::new();
    login_service.expect_authenticate().never();
    let state = HttpState::new(
        Arc::new(MockRegistrationService::new()),
        Arc::new(login_service),
        Arc::new(MockUsersQuery::new()),
    );
    let app = init_app(state).await;

    let (status, _body) = post_json(&app, "/api/users/login", json!({"username": "alice"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[rstest]
#[actix_web::test]
async fn get_user_returns_public_fields(repo: Arc<InMemoryUserRepository>) {
    let app = init_app(HttpState::from_repository(repo)).await;
    post_json(&app, "/api/users/register", alice()).await;

    let (status, body) = get_json(&app, "/api/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "username": "alice", "email": "a@x.com"}));
    assert!(body.get("password").is_none());
}

#[rstest]
#[case("/api/users/999999")]
#[case("/api/users/0")]
#[case("/api/users/-3")]
#[case("/api/users/abc")]
#[case("/api/users/99999999999999999999")]
#[case("/api/users/register")]
#[actix_web::test]
async fn get_user_reports_not_found(repo: Arc<InMemoryUserRepository>, #[case] uri: &str) {
    let app = init_app(HttpState::from_repository(repo)).await;

    let (status, body) = get_json(&app, uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[test]
fn user_response_omits_password_material() {
    let user = User::try_from_parts(4, "alice", "a@x.com").expect("valid user");
    let value = serde_json::to_value(UserResponse::from(user)).expect("serialise");
    assert_eq!(value, json!({"id": 4, "username": "alice", "email": "a@x.com"}));
}
