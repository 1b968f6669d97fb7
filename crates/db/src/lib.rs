//! Storage and query layer for the shelter API.
//!
//! Owns the SQLite connection pool and the repositories that compose the
//! read queries over `breeds` and `dogs`.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// The database file must already exist; it is never created here.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(false)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify a pooled connection can execute a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Row counts of the two shelter tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow, serde::Serialize)]
pub struct TableCounts {
    pub breeds: i64,
    pub dogs: i64,
}

/// Count the rows in `breeds` and `dogs` in a single round trip.
pub async fn table_counts(pool: &DbPool) -> Result<TableCounts, sqlx::Error> {
    sqlx::query_as::<_, TableCounts>(
        "SELECT (SELECT COUNT(*) FROM breeds) AS breeds, (SELECT COUNT(*) FROM dogs) AS dogs",
    )
    .fetch_one(pool)
    .await
}
