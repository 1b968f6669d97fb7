use axum::routing::get;
use axum::Router;

use crate::handlers::dogs;
use crate::state::AppState;

/// Dog routes, merged under `/api`.
///
/// ```text
/// GET /dogs          -> list_dogs
/// GET /dogs/{id}     -> get_dog
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dogs", get(dogs::list_dogs))
        .route("/dogs/{id}", get(dogs::get_dog))
}
