use axum::routing::get;
use axum::Router;

use crate::handlers::breeds;
use crate::state::AppState;

/// Breed routes, merged under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/breeds", get(breeds::list_breeds))
}
