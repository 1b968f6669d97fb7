use axum::extract::State;
use axum::Json;
use shelter_db::models::breed::Breed;
use shelter_db::repositories::BreedRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/breeds
pub async fn list_breeds(State(state): State<AppState>) -> AppResult<Json<Vec<Breed>>> {
    let breeds = BreedRepo::list(&state.pool).await?;

    Ok(Json(breeds))
}
