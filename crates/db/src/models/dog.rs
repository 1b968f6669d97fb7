//! Dog read models.

use serde::Serialize;
use shelter_core::dog::DogStatus;
use shelter_core::types::DbId;
use sqlx::FromRow;

/// Lightweight listing entry: a dog joined with its breed name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DogSummary {
    pub id: DbId,
    pub name: String,
    pub breed: String,
}

/// Full dog record joined with its breed name.
///
/// `status` is decoded from its stored symbolic name and serialized the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DogDetail {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub age: i64,
    pub description: String,
    pub gender: String,
    #[sqlx(try_from = "String")]
    pub status: DogStatus,
}
