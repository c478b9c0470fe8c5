//! API route definitions

pub mod dev_activity;
pub mod metrics;
pub mod projects;
pub mod scores;
pub mod signals;
pub mod social;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Project routes
        .route("/projects", get(projects::get_projects))
        .route("/projects/", get(projects::missing_project_id))
        .route("/projects/:id", get(projects::get_project))
        // Metrics routes
        .route("/metrics", get(metrics::get_metrics))
        .route("/metrics/:project_id", get(metrics::get_project_metrics))
        // Social routes
        .route("/social", get(social::get_social))
        .route("/social/mentions/:handle", get(social::get_mentions))
        .route("/social/mentions/:handle/count", get(social::get_mentions_count))
        .route("/social/mentions/:handle/score", get(social::get_mentions_score))
        // Catalogue feeds
        .route("/signals", get(signals::get_signals))
        .route("/dev-activity", get(dev_activity::get_dev_activity))
        // Score routes
        .route("/scores", get(scores::get_scores))
        .route("/scores/compute", post(scores::compute_project_score))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use chrono::{DateTime, Duration, Utc};
    use pulse_db::SeedCatalogue;
    use pulse_feeds::{
        price::StaticOracle,
        twitter::{DisabledMentions, Tweet, TweetPublicMetrics},
        FallbackOracle, FeedError, MentionPage, MentionQuery, MentionsSource, PriceOracle,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{app, AppState};

    /// Oracle that is always down
    pub struct DownOracle;

    #[async_trait]
    impl PriceOracle for DownOracle {
        async fn eth_usd(&self) -> Result<f64, FeedError> {
            Err(FeedError::Rpc("connection refused".to_string()))
        }

        fn name(&self) -> &'static str {
            "down"
        }
    }

    /// Mentions source serving three recent tweets and one stale tweet
    pub struct StubMentions {
        pub count: u64,
    }

    fn tweet(
        id: &str,
        created_at: DateTime<Utc>,
        likes: u64,
        retweets: u64,
        replies: u64,
    ) -> Tweet {
        Tweet {
            id: id.to_string(),
            text: format!("tweet {id}"),
            created_at: Some(created_at),
            author_id: Some("42".to_string()),
            public_metrics: Some(TweetPublicMetrics {
                retweet_count: retweets,
                reply_count: replies,
                like_count: likes,
                quote_count: 0,
            }),
        }
    }

    #[async_trait]
    impl MentionsSource for StubMentions {
        async fn search(&self, _: &str, query: &MentionQuery) -> Result<MentionPage, FeedError> {
            let now = Utc::now();
            let data = vec![
                tweet("1", now - Duration::hours(1), 10, 2, 1),
                tweet("2", now - Duration::hours(5), 5, 0, 0),
                tweet("3", now - Duration::hours(20), 0, 1, 3),
                tweet("old", now - Duration::days(3), 90_000, 0, 0),
            ];

            Ok(MentionPage {
                data: data.into_iter().take(query.max_results() as usize).collect(),
                meta: None,
                includes: None,
            })
        }

        async fn count(
            &self,
            _: &str,
            _: DateTime<Utc>,
            _: DateTime<Utc>,
        ) -> Result<u64, FeedError> {
            Ok(self.count)
        }
    }

    pub fn seed_app() -> Router {
        app_with(Arc::new(StaticOracle(2000.0)), Arc::new(StubMentions { count: 7 }))
    }

    pub fn app_with(oracle: Arc<dyn PriceOracle>, mentions: Arc<dyn MentionsSource>) -> Router {
        app(Arc::new(AppState {
            store: Arc::new(SeedCatalogue::new()),
            prices: FallbackOracle::new(oracle, 2000.0),
            mentions,
        }))
    }

    pub fn offline_app() -> Router {
        app_with(Arc::new(DownOracle), Arc::new(DisabledMentions))
    }

    pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }
}
