use serde::Serialize;
use shelter_core::types::DbId;
use sqlx::FromRow;

/// A row from the `breeds` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Breed {
    pub id: DbId,
    pub name: String,
}
