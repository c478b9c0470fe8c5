//! Social API routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use pulse_db::seed;
use pulse_feeds::{twitter::normalize_handle, MentionQuery};
use pulse_scoring::{compute_engagement_score, EngagementSummary, SocialPost, TimeWindow};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, AppState};

/// Query parameters for mention search
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionsParams {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub max_results: Option<u32>,
    pub pagination_token: Option<String>,
}

impl From<MentionsParams> for MentionQuery {
    fn from(params: MentionsParams) -> Self {
        MentionQuery {
            start_time: params.start_time,
            end_time: params.end_time,
            max_results: params.max_results,
            pagination_token: params.pagination_token,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowParams {
    pub time_window: Option<String>,
}

impl WindowParams {
    fn window(&self) -> Result<TimeWindow, ApiError> {
        match &self.time_window {
            Some(raw) => TimeWindow::parse(raw).map_err(|e| ApiError::BadRequest(e.to_string())),
            None => Ok(TimeWindow::default()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionScore {
    pub handle: String,
    pub time_window: String,
    /// Posts inside the window
    pub posts: usize,
    pub score: f64,
    pub summary: EngagementSummary,
}

/// GET /api/v1/social
pub async fn get_social() -> impl IntoResponse {
    Json(seed::SOCIAL)
}

/// GET /api/v1/social/mentions/:handle
/// Recent tweets mentioning the handle
pub async fn get_mentions(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
    Query(params): Query<MentionsParams>,
) -> impl IntoResponse {
    let handle = match normalize_handle(&handle) {
        Ok(handle) => handle,
        Err(e) => return ApiError::upstream("Invalid handle", &e).into_response(),
    };

    match state.mentions.search(handle, &params.into()).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch mentions for @{}: {}", handle, e);
            ApiError::upstream("Failed to fetch mentions", &e).into_response()
        }
    }
}

/// GET /api/v1/social/mentions/:handle/count
pub async fn get_mentions_count(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
    Query(params): Query<WindowParams>,
) -> impl IntoResponse {
    let window = match params.window() {
        Ok(window) => window,
        Err(e) => return e.into_response(),
    };
    let handle = match normalize_handle(&handle) {
        Ok(handle) => handle,
        Err(e) => return ApiError::upstream("Invalid handle", &e).into_response(),
    };

    match state.mentions.count_in_window(handle, &window).await {
        Ok(count) => Json(count).into_response(),
        Err(e) => {
            tracing::error!("Failed to count mentions for @{}: {}", handle, e);
            ApiError::upstream("Failed to fetch mention count", &e).into_response()
        }
    }
}

/// GET /api/v1/social/mentions/:handle/score
/// Engagement score of the mentions inside the window
pub async fn get_mentions_score(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
    Query(params): Query<WindowParams>,
) -> impl IntoResponse {
    let window = match params.window() {
        Ok(window) => window,
        Err(e) => return e.into_response(),
    };
    let handle = match normalize_handle(&handle) {
        Ok(handle) => handle,
        Err(e) => return ApiError::upstream("Invalid handle", &e).into_response(),
    };

    let (start, end) = window.ending_at(Utc::now());
    let page = match state
        .mentions
        .search(handle, &MentionQuery::within(start, end))
        .await
    {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Failed to fetch mentions for @{}: {}", handle, e);
            return ApiError::upstream("Failed to fetch mentions", &e).into_response();
        }
    };

    let posts: Vec<SocialPost> = page
        .social_posts()
        .into_iter()
        .filter(|p| p.created_at >= start && p.created_at <= end)
        .collect();

    Json(MentionScore {
        handle: handle.to_string(),
        time_window: window.label().to_string(),
        posts: posts.len(),
        score: compute_engagement_score(&posts, start, end),
        summary: EngagementSummary::from_posts(&posts),
    })
    .into_response()
}
