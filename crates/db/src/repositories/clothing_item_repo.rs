//! Repository for the `clothing_items` table.

use closet_core::item::{clamp_limit, clamp_offset, default_owner, non_empty, substring_pattern};
use closet_core::types::DbId;
use sqlx::PgPool;

use crate::models::clothing_item::{
    ClothingItem, ClothingItemQuery, CreateClothingItem, UpdateClothingItem,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, category, subcategory, brand, \
    purchase_date, purchase_price, tags, notes, image_urls, created_at, updated_at, owner";

/// Provides CRUD, listing and facet queries for clothing items.
pub struct ClothingItemRepo;

impl ClothingItemRepo {
    /// Insert a new item, returning the persisted row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClothingItem,
    ) -> Result<ClothingItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO clothing_items \
                (name, description, category, subcategory, brand, purchase_date, \
                 purchase_price, tags, notes, image_urls, owner) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(&input.brand)
            .bind(input.purchase_date)
            .bind(input.purchase_price)
            .bind(&input.tags)
            .bind(&input.notes)
            .bind(&input.image_urls)
            .bind(&input.owner)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ClothingItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clothing_items WHERE id = $1");
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List items matching all supplied filters and the optional search term.
    ///
    /// The search is a case-insensitive substring match OR'd across name,
    /// description, brand, notes and the comma-joined tags. Ties on the sort
    /// column are broken by `id` in the same direction.
    pub async fn list(
        pool: &PgPool,
        params: &ClothingItemQuery,
    ) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let limit = clamp_limit(params.limit);
        let offset = clamp_offset(params.skip);

        let category = non_empty(params.category.as_deref());
        let subcategory = non_empty(params.subcategory.as_deref());
        let brand = non_empty(params.brand.as_deref());
        let owner = non_empty(params.owner.as_deref());
        let search = non_empty(params.search.as_deref()).map(substring_pattern);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        for (column, value) in [
            ("category", category),
            ("subcategory", subcategory),
            ("brand", brand),
            ("owner", owner),
        ] {
            if value.is_some() {
                conditions.push(format!("{column} = ${bind_idx}"));
                bind_idx += 1;
            }
        }
        if search.is_some() {
            conditions.push(format!(
                "(name ILIKE ${bind_idx} \
                  OR description ILIKE ${bind_idx} \
                  OR brand ILIKE ${bind_idx} \
                  OR notes ILIKE ${bind_idx} \
                  OR array_to_string(tags, ',') ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let column = params.sort_by.column();
        let direction = params.sort_order.as_sql();
        let query = format!(
            "SELECT {COLUMNS} FROM clothing_items \
             {where_clause} \
             ORDER BY {column} {direction}, id {direction} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, ClothingItem>(&query);

        // Bind dynamic parameters in order.
        for value in [category, subcategory, brand, owner].into_iter().flatten() {
            q = q.bind(value);
        }
        if let Some(ref pattern) = search {
            q = q.bind(pattern);
        }

        q = q.bind(limit).bind(offset);
        q.fetch_all(pool).await
    }

    /// Apply a partial update. Only fields present in `input` are written;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClothingItem,
    ) -> Result<Option<ClothingItem>, sqlx::Error> {
        let present = [
            ("name", input.name.is_some()),
            ("description", input.description.is_some()),
            ("category", input.category.is_some()),
            ("subcategory", input.subcategory.is_some()),
            ("brand", input.brand.is_some()),
            ("purchase_date", input.purchase_date.is_some()),
            ("purchase_price", input.purchase_price.is_some()),
            ("tags", input.tags.is_some()),
            ("notes", input.notes.is_some()),
            ("image_urls", input.image_urls.is_some()),
            ("owner", input.owner.is_some()),
        ];

        // $1 is the id.
        let mut assignments = Vec::new();
        let mut bind_idx = 2u32;
        for (column, is_present) in present {
            if is_present {
                assignments.push(format!("{column} = ${bind_idx}"));
                bind_idx += 1;
            }
        }
        assignments.push("updated_at = NOW()".to_string());

        let query = format!(
            "UPDATE clothing_items SET {} WHERE id = $1 RETURNING {COLUMNS}",
            assignments.join(", ")
        );

        // Bind in the same field order as `present`.
        let mut q = sqlx::query_as::<_, ClothingItem>(&query).bind(id);
        if let Some(name) = &input.name {
            q = q.bind(name);
        }
        if let Some(description) = &input.description {
            q = q.bind(description);
        }
        if let Some(category) = &input.category {
            q = q.bind(category);
        }
        if let Some(subcategory) = &input.subcategory {
            q = q.bind(subcategory);
        }
        if let Some(brand) = &input.brand {
            q = q.bind(brand);
        }
        if let Some(purchase_date) = input.purchase_date {
            q = q.bind(purchase_date);
        }
        if let Some(purchase_price) = input.purchase_price {
            q = q.bind(purchase_price);
        }
        if let Some(tags) = &input.tags {
            q = q.bind(tags.clone().unwrap_or_default());
        }
        if let Some(notes) = &input.notes {
            q = q.bind(notes);
        }
        if let Some(image_urls) = &input.image_urls {
            q = q.bind(image_urls.clone().unwrap_or_default());
        }
        if let Some(owner) = &input.owner {
            q = q.bind(owner.clone().unwrap_or_else(default_owner));
        }

        q.fetch_optional(pool).await
    }

    /// Permanently delete an item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clothing_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct non-null categories currently in use.
    pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM clothing_items \
             WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(pool)
        .await
    }

    /// Distinct non-null brands currently in use.
    pub async fn distinct_brands(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT brand FROM clothing_items \
             WHERE brand IS NOT NULL ORDER BY brand",
        )
        .fetch_all(pool)
        .await
    }
}
