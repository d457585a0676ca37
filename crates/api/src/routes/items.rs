use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Clothing item routes mounted at `/items`.
///
/// ```text
/// GET    /                    -> list_items
/// POST   /                    -> create_item
/// GET    /filters/categories  -> list_categories
/// GET    /filters/brands      -> list_brands
/// GET    /{id}                -> get_item
/// PUT    /{id}                -> update_item
/// DELETE /{id}                -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route("/filters/categories", get(items::list_categories))
        .route("/filters/brands", get(items::list_brands))
        .route(
            "/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
