//! `GET /health`: database reachability plus how much shelter data is loaded.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use shelter_db::TableCounts;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"` when the tables can be read, `"degraded"` otherwise.
    pub status: &'static str,
    pub db_healthy: bool,
    /// Absent when the database could not be queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<TableCounts>,
}

impl HealthReport {
    fn from_counts(counts: Result<TableCounts, sqlx::Error>) -> Self {
        match counts {
            Ok(counts) => Self {
                status: "ok",
                db_healthy: true,
                counts: Some(counts),
            },
            Err(err) => {
                tracing::warn!(error = %err, "Health check could not read shelter tables");
                Self {
                    status: "degraded",
                    db_healthy: false,
                    counts: None,
                }
            }
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::from_counts(
        shelter_db::table_counts(&state.pool).await,
    ))
}

/// Root-level health route, mounted outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
