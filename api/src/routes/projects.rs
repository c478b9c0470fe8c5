//! Project API routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use pulse_db::Project;
use pulse_feeds::{twitter::Tweet, MentionQuery};
use pulse_scoring::{compute_engagement_score, signal_flag, Fundamentals, HypeLevel};
use serde::Serialize;

use crate::{error::ApiError, AppState};

/// Tweets fetched for the detail view
const DETAIL_MENTIONS: u32 = 10;

/// Project detail response - list item plus live mentions and derived labels
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: String,
    pub name: String,
    pub chain: String,
    pub tvl: f64,
    pub wallets: u64,
    /// Latest tweets mentioning the project
    pub mentions: Vec<Tweet>,
    /// Catalogue mention count
    pub mention_count: u64,
    pub commits: u64,
    pub score: f64,
    pub hype: HypeLevel,
    pub price: f64,
    pub description: String,
    pub twitter_handle: Option<String>,

    /// Engagement score (0-100) of the fetched tweets over the last 24h
    pub social_score: f64,
    pub fundamentals: Fundamentals,
    pub flag: &'static str,
}

impl ProjectDetail {
    fn new(project: Project, mentions: Vec<Tweet>, social_score: f64) -> Self {
        Self {
            fundamentals: Fundamentals::from_score(project.score),
            flag: signal_flag(project.score, project.hype),
            id: project.id,
            name: project.name,
            chain: project.chain,
            tvl: project.tvl,
            wallets: project.wallets,
            mentions,
            mention_count: project.mentions,
            commits: project.commits,
            score: project.score,
            hype: project.hype,
            price: project.price,
            description: project.description,
            twitter_handle: project.twitter_handle,
            social_score,
        }
    }
}

/// GET /api/v1/projects
/// Returns all projects with TVL valued at the current ETH price
pub async fn get_projects(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let quote = state.prices.quote().await;
    if quote.is_degraded() {
        tracing::debug!(price = quote.price, "Valuing projects at fallback ETH price");
    }

    match state.store.list().await {
        Ok(records) => {
            let items: Vec<Project> = records.iter().map(|r| r.resolve(quote.price)).collect();
            Json(items).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get projects: {}", e);
            ApiError::Internal("Failed to fetch projects".to_string()).into_response()
        }
    }
}

/// GET /api/v1/projects/
pub async fn missing_project_id() -> impl IntoResponse {
    ApiError::BadRequest("Project ID is required".to_string())
}

/// GET /api/v1/projects/:id
/// Returns project details with live mentions
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = id.trim();
    if id.is_empty() {
        return ApiError::BadRequest("Project ID is required".to_string()).into_response();
    }

    let record = match state.store.find(id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return ApiError::NotFound(format!("Project with ID {} not found", id)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get project {}: {}", id, e);
            return ApiError::Internal("Failed to fetch project details".to_string())
                .into_response();
        }
    };

    let quote = state.prices.quote().await;
    let project = record.resolve(quote.price);

    // Mentions are best effort: failures leave the list empty
    let mut mentions = Vec::new();
    if let Some(handle) = &project.twitter_handle {
        match state
            .mentions
            .search(handle, &MentionQuery::latest(DETAIL_MENTIONS))
            .await
        {
            Ok(page) => mentions = page.data,
            Err(e) => tracing::warn!("Error fetching mentions for @{}: {}", handle, e),
        }
    }

    let posts: Vec<_> = mentions.iter().filter_map(Tweet::to_social_post).collect();
    let now = Utc::now();
    let social_score = compute_engagement_score(&posts, now - Duration::hours(24), now);

    Json(ProjectDetail::new(project, mentions, social_score)).into_response()
}
