/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; each handler checks a connection out of the pool for
/// the lifetime of its query.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shelter_db::DbPool,
}
