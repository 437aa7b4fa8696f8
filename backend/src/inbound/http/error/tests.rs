//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::MissingFields, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::DuplicateIdentity, StatusCode::CONFLICT)]
#[case(ErrorCode::InvalidCredentials, StatusCode::UNAUTHORIZED)]
#[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] status: StatusCode) {
    assert_eq!(status_for(code), status);
    assert_eq!(ResponseError::status_code(&Error::new(code, "x")), status);
}

async fn render(error: Error, expected_trace_id: Option<&str>) -> (StatusCode, ErrorBody) {
    let response = ResponseError::error_response(&error);
    let status = response.status();

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body deserialises");
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("UNIQUE constraint failed: users.email at /tmp/users.db")
        .with_trace_id(expected_trace_id.clone());

    let (status, body) = render(error, Some(expected_trace_id.as_str())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Internal server error");
}

#[rstest]
#[case(Error::missing_fields(messages::MISSING_FIELDS), messages::MISSING_FIELDS)]
#[case(Error::duplicate_identity(messages::DUPLICATE_IDENTITY), messages::DUPLICATE_IDENTITY)]
#[case(Error::invalid_credentials(messages::INVALID_CREDENTIALS), messages::INVALID_CREDENTIALS)]
#[case(Error::not_found(messages::USER_NOT_FOUND), messages::USER_NOT_FOUND)]
#[actix_web::test]
async fn expected_errors_render_their_message(
    expected_trace_id: String,
    #[case] error: Error,
    #[case] message: &str,
) {
    let error = error.with_trace_id(expected_trace_id.clone());
    let (_status, body) = render(error, Some(expected_trace_id.as_str())).await;
    assert_eq!(body.error, message);
}

#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let (status, body) = render(Error::invalid_request("bad"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, ErrorBody {
        error: "bad".to_owned()
    });
}

#[actix_web::test]
async fn body_has_only_the_error_field() {
    let response = ResponseError::error_response(&Error::not_found("User not found"));
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(value, serde_json::json!({"error": "User not found"}));
}
