//! Score API routes

use axum::{response::IntoResponse, Json};
use pulse_db::seed;
use pulse_scoring::{compute_score, Fundamentals, ProjectMetrics, ScoreBand};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ComputedScore {
    /// Figures the score was computed from, after sanitizing
    pub metrics: ProjectMetrics,
    pub score: f64,
    pub fundamentals: Fundamentals,
    pub band: ScoreBand,
    pub color: &'static str,
}

/// GET /api/v1/scores
pub async fn get_scores() -> impl IntoResponse {
    Json(seed::SCORES)
}

/// POST /api/v1/scores/compute
/// Score arbitrary project figures; missing fields count as zero
pub async fn compute_project_score(Json(metrics): Json<ProjectMetrics>) -> impl IntoResponse {
    let metrics = metrics.sanitized();
    let score = compute_score(&metrics);
    let band = ScoreBand::from_score(score);
    tracing::debug!(score, "Computed project score");

    Json(ComputedScore {
        metrics,
        score,
        fundamentals: Fundamentals::from_score(score),
        band,
        color: band.color(),
    })
}
