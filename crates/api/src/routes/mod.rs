pub mod health;
pub mod items;
pub mod upload;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /items    -> item CRUD, listing and filter facets
/// /upload   -> image upload
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/upload", upload::router(config.upload_max_bytes))
}
