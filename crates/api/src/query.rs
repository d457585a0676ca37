//! Query-string extraction and the list parameters for `/api/items`.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use closet_core::item::{SortField, SortOrder};
use closet_db::models::clothing_item::ClothingItemQuery;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

/// `Query<T>` that also runs `validator` rules.
///
/// Both deserialization failures (unknown enum value, non-numeric number)
/// and rule violations are rejected with 422 before the handler runs.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::UnprocessableEntity(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::UnprocessableEntity(errors.to_string()))?;

        Ok(Self(value))
    }
}

/// Query parameters for `GET /api/items`.
#[derive(Debug, Deserialize, Validate)]
pub struct ListItemsParams {
    #[validate(range(min = 0))]
    pub skip: Option<i64>,
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub brand: Option<String>,
    pub owner: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: SortField,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl From<ListItemsParams> for ClothingItemQuery {
    fn from(params: ListItemsParams) -> Self {
        Self {
            category: params.category,
            subcategory: params.subcategory,
            brand: params.brand,
            owner: params.owner,
            search: params.search,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
            skip: params.skip,
            limit: params.limit,
        }
    }
}
