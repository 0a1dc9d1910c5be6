use axum::{extract::State, http::StatusCode};

use shelf_core::health::check_database;

use crate::state::AppState;

// ── GET /readyz ──────────────────────────────────────────────────────────────

pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    check_database(&state.db).await
}
