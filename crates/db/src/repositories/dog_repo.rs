//! Repository for the `dogs` table.
//!
//! Every query inner-joins `breeds` to resolve the breed's display name, so
//! a dog whose breed row is missing is never returned.

use shelter_core::dog::DogListFilter;
use shelter_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::dog::{DogDetail, DogSummary};

/// Escape character used in `LIKE ... ESCAPE` clauses.
const LIKE_ESCAPE: char = '\\';

/// Provides read access to dogs.
pub struct DogRepo;

impl DogRepo {
    /// List dogs matching `filter`, ordered by ID.
    pub async fn list(
        pool: &SqlitePool,
        filter: &DogListFilter,
    ) -> Result<Vec<DogSummary>, sqlx::Error> {
        let mut conditions = Vec::new();

        if filter.status.is_some() {
            conditions.push("d.status = ?");
        }
        if filter.name_contains.is_some() {
            conditions.push("d.name LIKE ? ESCAPE '\\'");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT d.id, d.name, b.name AS breed \
             FROM dogs d \
             JOIN breeds b ON b.id = d.breed_id \
             {where_clause} \
             ORDER BY d.id"
        );

        let mut q = sqlx::query_as::<_, DogSummary>(&query);

        // Bind dynamic parameters in order.
        if let Some(status) = filter.status {
            q = q.bind(status.as_str());
        }
        if let Some(ref name) = filter.name_contains {
            q = q.bind(contains_pattern(name));
        }

        if !filter.is_empty() {
            tracing::debug!(
                status = ?filter.status,
                name = ?filter.name_contains,
                "Listing dogs with filters"
            );
        }

        q.fetch_all(pool).await
    }

    /// Find a dog with its breed name by ID.
    pub async fn find_detail(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<DogDetail>, sqlx::Error> {
        sqlx::query_as::<_, DogDetail>(
            "SELECT d.id, d.name, b.name AS breed, d.age, d.description, d.gender, d.status \
             FROM dogs d \
             JOIN breeds b ON b.id = d.breed_id \
             WHERE d.id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}

/// Build a `LIKE` pattern matching `text` anywhere, with wildcards in the
/// input escaped so they match literally.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
