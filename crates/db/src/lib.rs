//! Persistence layer for clothing items.
//!
//! Owns the Postgres pool, the explicit table definition, the row/DTO models
//! and the repository that runs every query.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod schema;

pub use schema::ensure_schema;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
