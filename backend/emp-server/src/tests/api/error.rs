use crate::ApiError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_plain_text_body() {
    let error = ApiError::not_found("Employee with ID 9 not found");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Employee with ID 9 not found");
}

#[tokio::test]
async fn test_internal_error_returns_500_with_plain_text_body() {
    let error = ApiError::internal("Error retrieving employees: pool closed");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let content_type = response.headers().get(http::header::CONTENT_TYPE).cloned();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    assert_eq!(&body[..], b"Error retrieving employees: pool closed");
    assert!(
        content_type
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
}

#[test]
fn test_display_includes_location_but_body_does_not() {
    let error = ApiError::internal("boom");

    assert!(error.to_string().starts_with("Internal error: boom "));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
