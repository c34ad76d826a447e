//! `GET /health`: whether the database and the upload directories are usable.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when every dependency is usable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Staging and public upload directories both exist.
    pub uploads_ready: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let (db, uploads_ready) = tokio::join!(
        vtpartner_db::health_check(&state.pool),
        state.uploads.is_ready(),
    );

    let db_healthy = match db {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check: database unreachable");
            false
        }
    };
    if !uploads_ready {
        tracing::warn!(
            public_dir = %state.uploads.public_dir().display(),
            "Health check: upload directories missing"
        );
    }

    Json(HealthReport {
        status: if db_healthy && uploads_ready { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        uploads_ready,
    })
}

/// Mounted at the root, outside the API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
