//! Metrics API routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use pulse_feeds::PriceSource;
use pulse_scoring::{summarize, PortfolioSummary};
use serde::Serialize;

use crate::{error::ApiError, AppState};

// (date, TVL in ETH, wallets)
const CHART: [(&str, f64, u64); 4] = [
    ("2024-01-01", 4.0, 200),
    ("2024-02-01", 8.0, 400),
    ("2024-03-01", 14.0, 800),
    ("2024-04-01", 20.0, 1200),
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub summary: PortfolioSummary,
    pub eth_price: f64,
    pub price_source: PriceSource,
}

#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub date: &'static str,
    pub tvl: f64,
    pub wallets: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetricsResponse {
    pub project_id: String,
    pub eth_price: f64,
    pub price_source: PriceSource,
    pub chart: Vec<ChartPoint>,
}

/// GET /api/v1/metrics
/// Portfolio totals and per-chain distribution
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let quote = state.prices.quote().await;

    match state.store.list().await {
        Ok(records) => {
            let projects: Vec<_> = records.iter().map(|r| r.resolve(quote.price)).collect();
            let summary = summarize(
                projects
                    .iter()
                    .map(|p| (p.chain.as_str(), p.tvl, p.wallets)),
            );

            Json(MetricsResponse {
                summary,
                eth_price: quote.price,
                price_source: quote.source,
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get metrics: {}", e);
            ApiError::Internal("Failed to fetch metrics".to_string()).into_response()
        }
    }
}

/// GET /api/v1/metrics/:project_id
/// TVL and wallet history for a project
pub async fn get_project_metrics(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    let quote = state.prices.quote().await;

    let chart = CHART
        .iter()
        .map(|&(date, tvl_eth, wallets)| ChartPoint {
            date,
            tvl: quote.price * tvl_eth,
            wallets,
        })
        .collect();

    Json(ProjectMetricsResponse {
        project_id,
        eth_price: quote.price,
        price_source: quote.source,
        chart,
    })
}
