//! PostgreSQL access for the VT Partner API.
//!
//! All tables live in the externally owned `vtpartner` schema. Repositories
//! are stateless structs whose associated functions take a pool (or any
//! executor) and return `sqlx` results; mapping empty results and errors to
//! HTTP responses is left to the API layer.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

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
