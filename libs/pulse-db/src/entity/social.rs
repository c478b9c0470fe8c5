use serde::Serialize;

/// Per-project community figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetrics {
    pub project_id: &'static str,
    pub project: &'static str,
    pub chain: &'static str,
    pub twitter_mentions: u64,
    pub discord_members: u64,
    pub reddit_posts: u64,
}
