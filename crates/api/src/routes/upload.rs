use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Image upload route mounted at `/upload`.
///
/// ```text
/// POST /  -> upload_images
/// ```
///
/// The body limit replaces axum's 2 MiB default for this route only.
pub fn router(max_body_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload_images))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}
