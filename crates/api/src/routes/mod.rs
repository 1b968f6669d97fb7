pub mod breeds;
pub mod dogs;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /dogs                 list dogs (?status=available, ?name=)
/// /dogs/{id}            single dog
/// /breeds               list breeds
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(dogs::router())
        .merge(breeds::router())
}
