use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Response};
use serde::Deserialize;

use super::{normalize_handle, MentionPage, MentionQuery, MentionsSource};
use crate::error::FeedError;

pub const TWITTER_API_BASE: &str = "https://api.twitter.com/2";

const TWEET_FIELDS: &str = "created_at,public_metrics,author_id";
const USER_FIELDS: &str = "username,name,public_metrics";
const EXPANSIONS: &str = "author_id";

mod limits {
    /// `end_time` must be at least this far in the past
    pub const END_LAG_SECS: i64 = 10;
    /// Oldest `start_time` the recent endpoints accept (7 days less a minute of slack)
    pub const LOOKBACK_MINS: i64 = 7 * 24 * 60 - 1;
}

#[derive(Debug, Deserialize)]
struct CountsMeta {
    #[serde(default)]
    total_tweet_count: u64,
}

#[derive(Debug, Deserialize)]
struct CountsResponse {
    meta: Option<CountsMeta>,
}

/// Twitter/X v2 client using app-only bearer authentication
pub struct TwitterClient {
    client: Client,
    api_base: String,
    bearer_token: String,
}

impl TwitterClient {
    pub fn new(api_base: &str, bearer_token: &str, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.to_string(),
        })
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Response, FeedError> {
        let response = self
            .client
            .get(format!("{}{}", self.api_base, path))
            .bearer_auth(&self.bearer_token)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl MentionsSource for TwitterClient {
    async fn search(&self, handle: &str, query: &MentionQuery) -> Result<MentionPage, FeedError> {
        let handle = normalize_handle(handle)?;
        let params = search_params(handle, query, Utc::now());

        let response = self.get("/tweets/search/recent", &params).await?;
        Ok(response.json::<MentionPage>().await?)
    }

    async fn count(
        &self,
        handle: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, FeedError> {
        let handle = normalize_handle(handle)?;
        let params = count_params(handle, start, end, Utc::now());

        let response = self.get("/tweets/counts/recent", &params).await?;
        let counts = response.json::<CountsResponse>().await?;

        Ok(counts.meta.map(|m| m.total_tweet_count).unwrap_or(0))
    }
}

/// Clamp a time range to what the recent endpoints accept: `end` at least 10s
/// before `now`, `start` within the last 7 days. A range left empty by the
/// clamp drops its start.
fn recent_bounds(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let latest = now - chrono::Duration::seconds(limits::END_LAG_SECS);
    let earliest = now - chrono::Duration::minutes(limits::LOOKBACK_MINS);

    let end = end.map(|e| e.min(latest));
    let start = start.map(|s| s.max(earliest));

    match (start, end) {
        (Some(s), Some(e)) if s >= e => (None, Some(e)),
        (Some(s), None) if s >= latest => (None, None),
        bounds => bounds,
    }
}

fn count_params(
    handle: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("query", format!("@{handle}")),
        ("granularity", "day".to_string()),
    ];

    let (start, end) = recent_bounds(Some(start), Some(end), now);
    if let Some(start) = start {
        params.push(("start_time", timestamp(start)));
    }
    if let Some(end) = end {
        params.push(("end_time", timestamp(end)));
    }

    params
}

fn search_params(
    handle: &str,
    query: &MentionQuery,
    now: DateTime<Utc>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("query", format!("@{handle}")),
        ("max_results", query.max_results().to_string()),
        ("tweet.fields", TWEET_FIELDS.to_string()),
        ("user.fields", USER_FIELDS.to_string()),
        ("expansions", EXPANSIONS.to_string()),
    ];

    let (start, end) = recent_bounds(query.start_time, query.end_time, now);
    if let Some(start) = start {
        params.push(("start_time", timestamp(start)));
    }
    if let Some(end) = end {
        params.push(("end_time", timestamp(end)));
    }
    if let Some(token) = &query.pagination_token {
        params.push(("pagination_token", token.clone()));
    }

    params
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_search_params() {
        let now = at("2024-03-04T12:00:00Z");
        let start = at("2024-03-01T00:00:00Z");
        let query = MentionQuery {
            start_time: Some(start),
            end_time: None,
            max_results: Some(10),
            pagination_token: Some("b26v89c19zqg8o3f".to_string()),
        };

        let params = search_params("nexusprotocol", &query, now);

        assert_eq!(param(&params, "query"), Some("@nexusprotocol"));
        assert_eq!(param(&params, "max_results"), Some("10"));
        assert_eq!(param(&params, "start_time"), Some("2024-03-01T00:00:00Z"));
        assert_eq!(param(&params, "end_time"), None);
        assert_eq!(param(&params, "pagination_token"), Some("b26v89c19zqg8o3f"));
        assert_eq!(param(&params, "tweet.fields"), Some(TWEET_FIELDS));
    }

    #[test]
    fn test_search_params_clamped_to_recent_range() {
        let now = at("2024-03-10T12:00:00Z");
        let query = MentionQuery::within(at("2024-02-25T12:00:00Z"), now);

        let params = search_params("nexusprotocol", &query, now);

        assert_eq!(param(&params, "start_time"), Some("2024-03-03T12:01:00Z"));
        assert_eq!(param(&params, "end_time"), Some("2024-03-10T11:59:50Z"));
    }

    #[test]
    fn test_count_params_for_windows() {
        let now = at("2024-03-10T12:00:00Z");

        // 24h window ending now: only the end moves
        let params = count_params("nexusprotocol", at("2024-03-09T12:00:00Z"), now, now);
        assert_eq!(param(&params, "query"), Some("@nexusprotocol"));
        assert_eq!(param(&params, "start_time"), Some("2024-03-09T12:00:00Z"));
        assert_eq!(param(&params, "end_time"), Some("2024-03-10T11:59:50Z"));

        // 2w window: start pulled into the last 7 days
        let params = count_params("nexusprotocol", at("2024-02-25T12:00:00Z"), now, now);
        assert_eq!(param(&params, "start_time"), Some("2024-03-03T12:01:00Z"));

        // 0h window: nothing left before the end lag, start dropped
        let params = count_params("nexusprotocol", now, now, now);
        assert_eq!(param(&params, "start_time"), None);
        assert_eq!(param(&params, "end_time"), Some("2024-03-10T11:59:50Z"));
    }

    #[test]
    fn test_parse_counts() {
        let body = r#"{
            "data": [
                {
                    "end": "2024-03-02T00:00:00.000Z",
                    "start": "2024-03-01T00:00:00.000Z",
                    "tweet_count": 12
                }
            ],
            "meta": {"total_tweet_count": 12}
        }"#;
        let counts: CountsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(counts.meta.unwrap().total_tweet_count, 12);
    }

    #[tokio::test]
    async fn test_invalid_handle_rejected_before_request() {
        let client =
            TwitterClient::new("http://127.0.0.1:9", "token", Duration::from_secs(1)).unwrap();
        let err = client
            .search("bad handle", &MentionQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, FeedError::InvalidHandle(_)));
    }
}
