//! Handlers for clothing item CRUD, listing and filter facets.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use closet_core::error::CoreError;
use closet_core::item::ENTITY_NAME;
use closet_core::types::DbId;
use closet_db::models::clothing_item::{ClothingItem, CreateClothingItem, UpdateClothingItem};
use closet_db::repositories::ClothingItemRepo;
use serde::Serialize;

use crate::body::JsonBody;
use crate::error::{AppError, AppResult};
use crate::query::{ListItemsParams, ValidatedQuery};
use crate::state::AppState;

/// Body returned by endpoints that only acknowledge an action.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    })
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateClothingItem>,
) -> AppResult<(StatusCode, Json<ClothingItem>)> {
    let item = ClothingItemRepo::create(&state.pool, &input).await?;

    tracing::info!(
        item_id = item.id,
        name = ?item.name,
        owner = %item.owner,
        "Clothing item created",
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/items
///
/// Filters are ANDed together; `search` matches any of the text fields.
pub async fn list_items(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListItemsParams>,
) -> AppResult<Json<Vec<ClothingItem>>> {
    let items = ClothingItemRepo::list(&state.pool, &params.into()).await?;
    Ok(Json(items))
}

/// GET /api/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ClothingItem>> {
    let item = ClothingItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// PUT /api/items/{id}
///
/// Partial update: absent fields are untouched, `null` clears a field.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateClothingItem>,
) -> AppResult<Json<ClothingItem>> {
    let item = ClothingItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(item_id = id, "Clothing item updated");

    Ok(Json(item))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ClothingItemRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(item_id = id, "Clothing item deleted");

    Ok(Json(MessageResponse {
        message: "Item deleted successfully",
    }))
}

/// GET /api/items/filters/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let categories = ClothingItemRepo::distinct_categories(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/items/filters/brands
pub async fn list_brands(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let brands = ClothingItemRepo::distinct_brands(&state.pool).await?;
    Ok(Json(brands))
}
