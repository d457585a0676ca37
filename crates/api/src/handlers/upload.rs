//! Handler for multipart image uploads.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use closet_cloud::UploadFile;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying image files. May repeat.
pub const FILES_FIELD: &str = "files";

/// Response for a successful upload batch.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// One URL per uploaded file, in submission order.
    pub image_urls: Vec<String>,
}

/// POST /api/upload
///
/// Accepts one or more `files` parts. Every part must declare an `image/*`
/// content type; the first that does not fails the request with 400.
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        files.push(UploadFile {
            filename,
            content_type,
            data: data.to_vec(),
        });
    }

    if files.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "Missing required '{FILES_FIELD}' field"
        )));
    }

    let image_urls = state.uploads.upload_batch(&files).await?;

    tracing::info!(
        count = image_urls.len(),
        backend = state.uploads.backend(),
        "Images uploaded",
    );

    Ok(Json(UploadResponse { image_urls }))
}

/// Body limit violations keep their 413; any other malformed part is a 400.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
