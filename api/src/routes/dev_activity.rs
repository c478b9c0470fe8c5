//! Developer activity API routes

use axum::{response::IntoResponse, Json};
use pulse_db::seed;

/// GET /api/v1/dev-activity
pub async fn get_dev_activity() -> impl IntoResponse {
    Json(seed::DEV_ACTIVITY)
}
