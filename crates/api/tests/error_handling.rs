//! Mapping of [`AppError`] variants to HTTP status codes and JSON bodies.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use closet_api::error::AppError;
use closet_core::error::CoreError;
use common::body_json;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn not_found_names_entity_and_id() {
    let (status, json) = render(AppError::Core(CoreError::NotFound {
        entity: "ClothingItem",
        id: 7,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "ClothingItem with id 7 not found");
}

#[tokio::test]
async fn core_validation_is_bad_request() {
    let (status, json) = render(CoreError::Validation("File a.txt is not an image".into()).into())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "File a.txt is not an image");
}

#[tokio::test]
async fn storage_write_names_file_but_hides_reason() {
    let (status, json) = render(
        CoreError::StorageWrite {
            filename: "coat.jpg".into(),
            reason: "AccessDenied: secret-bucket".into(),
        }
        .into(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "UPLOAD_FAILED");
    assert_eq!(json["error"], "Failed to upload coat.jpg");
}

#[tokio::test]
async fn database_errors_are_sanitized() {
    let (status, json) = render(sqlx::Error::PoolTimedOut.into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");

    let (status, json) = render(sqlx::Error::Protocol("password=hunter2".into()).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn http_specific_variants() {
    let (status, json) = render(AppError::BadRequest("bad multipart".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");

    let (status, json) = render(AppError::UnprocessableEntity("limit: range".into())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "limit: range");

    let (status, json) = render(AppError::PayloadTooLarge("too big".into())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");
}
