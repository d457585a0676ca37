//! Clothing item entity model and DTOs.

use closet_core::item::{default_owner, SortField, SortOrder};
use closet_core::patch::double_option;
use closet_core::timestamp;
use closet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `clothing_items` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ClothingItem {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub brand: Option<String>,
    pub purchase_date: Option<Timestamp>,
    pub purchase_price: Option<f64>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub image_urls: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub owner: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a clothing item.
///
/// Missing `tags` and `image_urls` become empty lists and a missing `owner`
/// becomes `"default"`; [`Default`] fills the same values.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClothingItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub purchase_date: Option<Timestamp>,
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default = "default_owner")]
    pub owner: String,
}

impl Default for CreateClothingItem {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            category: None,
            subcategory: None,
            brand: None,
            purchase_date: None,
            purchase_price: None,
            tags: Vec::new(),
            notes: None,
            image_urls: Vec::new(),
            owner: default_owner(),
        }
    }
}

/// DTO for partially updating a clothing item.
///
/// Every field is `Option<Option<T>>`: `None` leaves the column untouched,
/// `Some(None)` is an explicit `null`. For the non-nullable columns an
/// explicit `null` resets `tags`/`image_urls` to `[]` and `owner` to
/// `"default"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClothingItem {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub subcategory: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub brand: Option<Option<String>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_patch")]
    pub purchase_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "double_option")]
    pub purchase_price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_urls: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub owner: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// List query
// ---------------------------------------------------------------------------

/// Filters, search, ordering and paging for [`crate::repositories::ClothingItemRepo::list`].
///
/// Blank strings count as absent. `limit` is clamped to `[1, 1000]`
/// (default 100) and `skip` to `>= 0`.
#[derive(Debug, Clone, Default)]
pub struct ClothingItemQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub brand: Option<String>,
    pub owner: Option<String>,
    pub search: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
