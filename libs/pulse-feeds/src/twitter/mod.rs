//! Project mentions from the Twitter/X v2 API

pub mod client;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pulse_scoring::{SocialPost, TimeWindow};
use serde::{Deserialize, Serialize};

use crate::error::FeedError;

pub use client::TwitterClient;

mod defaults {
    pub const MAX_RESULTS: u32 = 100;
    pub const MIN_RESULTS: u32 = 10;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetPublicMetrics {
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub quote_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_metrics: Option<TweetPublicMetrics>,
}

impl Tweet {
    /// Tweets without a creation time cannot be placed in a window and are skipped
    pub fn to_social_post(&self) -> Option<SocialPost> {
        let metrics = self.public_metrics.unwrap_or_default();

        self.created_at.map(|created_at| SocialPost {
            id: self.id.clone(),
            created_at,
            likes: metrics.like_count,
            reposts: metrics.retweet_count,
            replies: metrics.reply_count,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublicMetrics {
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub tweet_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_metrics: Option<UserPublicMetrics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<TwitterUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentionMeta {
    #[serde(default)]
    pub result_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newest_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oldest_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of mention search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentionPage {
    #[serde(default)]
    pub data: Vec<Tweet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MentionMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Includes>,
}

impl MentionPage {
    pub fn social_posts(&self) -> Vec<SocialPost> {
        self.data.iter().filter_map(Tweet::to_social_post).collect()
    }
}

/// Mention search options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionQuery {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub max_results: Option<u32>,
    pub pagination_token: Option<String>,
}

impl MentionQuery {
    pub fn latest(max_results: u32) -> Self {
        Self {
            max_results: Some(max_results),
            ..Default::default()
        }
    }

    pub fn within(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start_time: Some(start),
            end_time: Some(end),
            ..Default::default()
        }
    }

    /// Page size accepted by the search endpoint (10-100)
    pub fn max_results(&self) -> u32 {
        self.max_results
            .unwrap_or(defaults::MAX_RESULTS)
            .clamp(defaults::MIN_RESULTS, defaults::MAX_RESULTS)
    }
}

/// Mention count over a time window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionCount {
    pub count: u64,
    pub time_window: String,
}

#[async_trait]
pub trait MentionsSource: Send + Sync {
    /// Search recent tweets mentioning `@handle`
    async fn search(&self, handle: &str, query: &MentionQuery) -> Result<MentionPage, FeedError>;

    /// Number of tweets mentioning `@handle` between `start` and `end`
    async fn count(
        &self,
        handle: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, FeedError>;

    /// Count mentions over the window ending now
    async fn count_in_window(
        &self,
        handle: &str,
        window: &TimeWindow,
    ) -> Result<MentionCount, FeedError> {
        let (start, end) = window.ending_at(Utc::now());
        let count = self.count(handle, start, end).await?;

        Ok(MentionCount {
            count,
            time_window: window.label().to_string(),
        })
    }
}

/// Used when no Twitter credentials are configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledMentions;

#[async_trait]
impl MentionsSource for DisabledMentions {
    async fn search(&self, _: &str, _: &MentionQuery) -> Result<MentionPage, FeedError> {
        Err(FeedError::NotConfigured("TWITTER_BEARER_TOKEN"))
    }

    async fn count(&self, _: &str, _: DateTime<Utc>, _: DateTime<Utc>) -> Result<u64, FeedError> {
        Err(FeedError::NotConfigured("TWITTER_BEARER_TOKEN"))
    }
}

/// Normalize a handle: strip a leading `@` and check it is 1-15 of `[A-Za-z0-9_]`
pub fn normalize_handle(handle: &str) -> Result<&str, FeedError> {
    let trimmed = handle.trim();
    let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);

    let valid = !bare.is_empty()
        && bare.len() <= 15
        && bare.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(bare)
    } else {
        Err(FeedError::InvalidHandle(handle.to_string()))
    }
}
