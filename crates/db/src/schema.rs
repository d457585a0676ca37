//! Explicit definition of the `clothing_items` table.
//!
//! There is no migration history; the table is created on startup when it
//! does not exist yet. Column defaults mirror the create DTO defaults.

use sqlx::PgPool;

const CREATE_CLOTHING_ITEMS: &str = "\
    CREATE TABLE IF NOT EXISTS clothing_items ( \
        id             BIGSERIAL PRIMARY KEY, \
        name           TEXT, \
        description    TEXT, \
        category       TEXT, \
        subcategory    TEXT, \
        brand          TEXT, \
        purchase_date  TIMESTAMPTZ, \
        purchase_price DOUBLE PRECISION, \
        tags           TEXT[] NOT NULL DEFAULT '{}', \
        notes          TEXT, \
        image_urls     TEXT[] NOT NULL DEFAULT '{}', \
        created_at     TIMESTAMPTZ NOT NULL DEFAULT NOW(), \
        updated_at     TIMESTAMPTZ, \
        owner          TEXT NOT NULL DEFAULT 'default' \
    )";

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_clothing_items_category ON clothing_items (category)",
    "CREATE INDEX IF NOT EXISTS idx_clothing_items_brand ON clothing_items (brand)",
    "CREATE INDEX IF NOT EXISTS idx_clothing_items_owner ON clothing_items (owner)",
    "CREATE INDEX IF NOT EXISTS idx_clothing_items_created_at ON clothing_items (created_at)",
];

/// Create the `clothing_items` table and its indexes if missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CLOTHING_ITEMS).execute(pool).await?;
    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("clothing_items schema ensured");
    Ok(())
}
