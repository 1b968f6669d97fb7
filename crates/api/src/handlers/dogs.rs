//! Handlers for dog listing and lookup.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use shelter_core::dog::{validate_dog_age, DogListFilter};
use shelter_core::error::CoreError;
use shelter_core::types::DbId;
use shelter_db::models::dog::{DogDetail, DogSummary};
use shelter_db::repositories::DogRepo;

use crate::error::{AppError, AppResult};
use crate::query::DogListParams;
use crate::state::AppState;

/// GET /api/dogs
///
/// List dogs with their breed name. `?status=available` keeps only available
/// dogs; `?name=` keeps dogs whose name contains the text, ignoring case.
pub async fn list_dogs(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<DogSummary>>> {
    let Query(pairs) = pairs.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let params = DogListParams::from_pairs(pairs);
    let filter = DogListFilter::from_params(params.status.as_deref(), params.name.as_deref());

    let dogs = DogRepo::list(&state.pool, &filter).await?;

    Ok(Json(dogs))
}

/// GET /api/dogs/{id}
///
/// Full record for a single dog, with `status` rendered by name. An id
/// segment that is not a plain unsigned integer is treated as not found.
pub async fn get_dog(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DogDetail>> {
    let Some(dog_id) = parse_dog_id(&raw_id) else {
        tracing::debug!(raw_id = %raw_id, "Dog id is not an integer");
        return Err(AppError::NotFound("Dog"));
    };

    let Some(dog) = DogRepo::find_detail(&state.pool, dog_id).await? else {
        tracing::debug!(dog_id, "Dog not found");
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Dog",
            id: dog_id,
        }));
    };

    if let Err(err) = validate_dog_age(dog.age) {
        tracing::warn!(dog_id, age = dog.age, error = %err, "Stored dog age is out of range");
    }

    Ok(Json(dog))
}

/// Accept only ASCII digits, so `-1`, `+5` and ` 5` never reach the database.
fn parse_dog_id(raw: &str) -> Option<DbId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
