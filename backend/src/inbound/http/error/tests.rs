//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

async fn render(error: Error) -> (StatusCode, Option<String>, ErrorBody) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let content_type = response
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, content_type, body)
}

#[rstest]
#[case::invalid(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case::missing(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
#[case::internal(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&Error::new(code, "x")), status);
}

#[rstest]
#[case::invalid_id(Error::invalid_request("Invalid user ID"), "Invalid user ID")]
#[case::not_found(Error::not_found("User not found"), "User not found")]
#[actix_web::test]
async fn client_errors_expose_their_message(#[case] error: Error, #[case] expected: &str) {
    let (_, content_type, body) = render(error).await;

    assert_eq!(body, ErrorBody::new(expected));
    assert_eq!(content_type.as_deref(), Some(JSON_CONTENT_TYPE));
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let (status, _, body) = render(Error::internal("disk at /var/data is full")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
}

#[rstest]
fn actix_errors_become_internal_errors() {
    let actix_error = actix_web::error::ErrorBadGateway("upstream");
    let error = Error::from(actix_error);

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), INTERNAL_ERROR_MESSAGE);
}
