//! Repository for the `breeds` table.

use sqlx::SqlitePool;

use crate::models::breed::Breed;

/// Provides read access to breeds.
pub struct BreedRepo;

impl BreedRepo {
    /// List every breed, ordered by ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Breed>, sqlx::Error> {
        sqlx::query_as::<_, Breed>("SELECT id, name FROM breeds ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
