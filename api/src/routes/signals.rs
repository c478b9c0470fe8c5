//! Signal API routes

use axum::{response::IntoResponse, Json};
use pulse_db::seed;

/// GET /api/v1/signals
pub async fn get_signals() -> impl IntoResponse {
    Json(seed::SIGNALS)
}
