//! ChainPulse API Server
//!
//! REST API endpoints for the ChainPulse dashboard.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use pulse_db::{PgProjectStore, ProjectStore, SeedCatalogue};
use pulse_feeds::{
    price::{AggregatorOracle, ChainlinkApiOracle},
    twitter::{DisabledMentions, TwitterClient},
    FallbackOracle, MentionsSource, PriceOracle,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod routes;

use config::Config;

/// Application state shared across handlers
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub prices: FallbackOracle,
    pub mentions: Arc<dyn MentionsSource>,
}

impl AppState {
    /// Wire up the catalogue and upstream clients selected by `config`
    pub async fn from_config(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let store: Arc<dyn ProjectStore> = match &config.database_url {
            Some(url) => {
                let db_pool =
                    pulse_db::initialize_database(url, config.database_max_connections).await?;
                tracing::info!("Connected to database");
                Arc::new(PgProjectStore::new(db_pool))
            }
            None => Arc::new(SeedCatalogue::new()),
        };

        let oracle: Arc<dyn PriceOracle> = match &config.price_rpc_url {
            Some(rpc_url) => Arc::new(AggregatorOracle::new(
                rpc_url,
                &config.price_feed_address,
                config.upstream_timeout,
            )?),
            None => Arc::new(ChainlinkApiOracle::new(
                &config.chainlink_api_url,
                config.chainlink_api_key.clone(),
                config.upstream_timeout,
            )?),
        };

        let mentions: Arc<dyn MentionsSource> = match &config.twitter_bearer_token {
            Some(token) => Arc::new(TwitterClient::new(
                &config.twitter_api_base,
                token,
                config.upstream_timeout,
            )?),
            None => {
                tracing::warn!("TWITTER_BEARER_TOKEN not set, social mentions disabled");
                Arc::new(DisabledMentions)
            }
        };

        let prices = FallbackOracle::new(oracle, config.fallback_eth_price);
        tracing::info!(
            catalogue = store.name(),
            oracle = prices.oracle_name(),
            "Upstreams configured"
        );

        Ok(Self {
            store,
            prices,
            mentions,
        })
    }
}

/// Build the HTTP router
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root endpoint with API info
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API routes
        .nest("/api/v1", routes::api_routes())
        .fallback(not_found)
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,pulse_feeds=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ChainPulse API Server...");

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config).await?);

    let addr = config.listen_addr()?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("API available at http://{}/api/v1", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

/// Root endpoint - API information
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to ChainPulse API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "projects": "/api/v1/projects",
            "metrics": "/api/v1/metrics",
            "signals": "/api/v1/signals",
            "social": "/api/v1/social",
            "mentions": "/api/v1/social/mentions/:handle",
            "dev-activity": "/api/v1/dev-activity",
            "scores": "/api/v1/scores",
            "compute-score": "/api/v1/scores/compute"
        }
    }))
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": "The requested endpoint does not exist"
        })),
    )
}
