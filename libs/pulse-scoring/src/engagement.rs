//! Social Engagement Score
//!
//! Calculates a score from 0-100 from recent social posts:
//! - Engagement (0-100): likes + 2*reposts + replies, one point per 100
//! - Frequency bonus: 5 points for every post inside the window
//!
//! The sum of both is capped at 100.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const ENGAGEMENT_PER_POINT: f64 = 100.0;
const POST_BONUS: f64 = 5.0;
const MAX_SCORE: f64 = 100.0;

/// A social post with its public engagement counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub likes: u64,
    pub reposts: u64,
    pub replies: u64,
}

impl SocialPost {
    /// Weighted engagement: reposts count double
    pub fn weighted_engagement(&self) -> u64 {
        self.likes
            .saturating_add(self.reposts.saturating_mul(2))
            .saturating_add(self.replies)
    }

    fn within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.created_at >= start && self.created_at <= end
    }
}

/// Engagement score (0-100) of the posts created within `[window_start, window_end]`.
pub fn compute_engagement_score(
    posts: &[SocialPost],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> f64 {
    let (count, total_engagement) = posts
        .iter()
        .filter(|post| post.within(window_start, window_end))
        .fold((0_u64, 0_u64), |(count, total), post| {
            (count + 1, total.saturating_add(post.weighted_engagement()))
        });

    if count == 0 {
        return 0.0;
    }

    let base_score = (total_engagement as f64 / ENGAGEMENT_PER_POINT).min(MAX_SCORE);
    let time_bonus = count as f64 * POST_BONUS;

    (base_score + time_bonus).min(MAX_SCORE)
}

/// Unweighted engagement totals over a set of posts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EngagementSummary {
    pub total: u64,
    pub likes: u64,
    pub reposts: u64,
    pub replies: u64,
}

impl EngagementSummary {
    pub fn from_posts(posts: &[SocialPost]) -> Self {
        posts.iter().fold(Self::default(), |acc, post| Self {
            total: acc
                .total
                .saturating_add(post.likes)
                .saturating_add(post.reposts)
                .saturating_add(post.replies),
            likes: acc.likes.saturating_add(post.likes),
            reposts: acc.reposts.saturating_add(post.reposts),
            replies: acc.replies.saturating_add(post.replies),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post(
        id: &str,
        created_at: DateTime<Utc>,
        likes: u64,
        reposts: u64,
        replies: u64,
    ) -> SocialPost {
        SocialPost {
            id: id.to_string(),
            created_at,
            likes,
            reposts,
            replies,
        }
    }

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let end = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        (end - Duration::hours(24), end)
    }

    #[test]
    fn test_empty_posts_score_zero() {
        let (start, end) = window();
        assert_eq!(compute_engagement_score(&[], start, end), 0.0);
    }

    #[test]
    fn test_three_posts_in_window() {
        let (start, end) = window();
        let posts = vec![
            post("1", end - Duration::hours(1), 10, 2, 1),
            post("2", end - Duration::hours(5), 5, 0, 0),
            post("3", end - Duration::hours(20), 0, 1, 3),
        ];

        // (15 + 5 + 5) / 100 + 3 * 5
        assert_eq!(compute_engagement_score(&posts, start, end), 15.25);
    }

    #[test]
    fn test_posts_outside_window_ignored() {
        let (start, end) = window();
        let mut posts = vec![post("1", end - Duration::hours(2), 40, 10, 5)];
        let before = compute_engagement_score(&posts, start, end);

        posts.push(post("old", start - Duration::seconds(1), u64::MAX, u64::MAX, u64::MAX));
        posts.push(post("future", end + Duration::minutes(1), 1_000_000, 0, 0));

        assert_eq!(compute_engagement_score(&posts, start, end), before);
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let (start, end) = window();
        let posts = vec![post("a", start, 0, 0, 0), post("b", end, 0, 0, 0)];

        assert_eq!(compute_engagement_score(&posts, start, end), 10.0);
    }

    #[test]
    fn test_inverted_window_scores_zero() {
        let (start, end) = window();
        let posts = vec![post("1", end - Duration::hours(1), 10, 2, 1)];

        assert_eq!(compute_engagement_score(&posts, end, start), 0.0);
    }

    #[test]
    fn test_score_capped_at_100() {
        let (start, end) = window();
        let viral = vec![post("1", end, u64::MAX, u64::MAX, u64::MAX)];
        assert_eq!(compute_engagement_score(&viral, start, end), 100.0);

        let chatty: Vec<SocialPost> = (0..30)
            .map(|i| post(&i.to_string(), end - Duration::minutes(i), 0, 0, 0))
            .collect();
        assert_eq!(compute_engagement_score(&chatty, start, end), 100.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let (start, end) = window();
        for n in 0..40_u64 {
            let posts: Vec<SocialPost> = (0..n)
                .map(|i| {
                    let at = end - Duration::minutes(i as i64);
                    post(&i.to_string(), at, i * 37, i * 11, i * 5)
                })
                .collect();
            let score = compute_engagement_score(&posts, start, end);
            assert!((0.0..=100.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let (start, end) = window();
        let mut posts = vec![
            post("1", end - Duration::hours(1), 10, 2, 1),
            post("2", end - Duration::hours(5), 5, 0, 0),
            post("3", end - Duration::hours(20), 0, 1, 3),
        ];

        let first = compute_engagement_score(&posts, start, end);
        assert_eq!(compute_engagement_score(&posts, start, end), first);

        posts.reverse();
        assert_eq!(compute_engagement_score(&posts, start, end), first);
    }

    #[test]
    fn test_summary_totals() {
        let (_, end) = window();
        let posts = vec![
            post("1", end, 10, 2, 1),
            post("2", end, 5, 0, 0),
            post("3", end, 0, 1, 3),
        ];

        let summary = EngagementSummary::from_posts(&posts);
        assert_eq!(summary.likes, 15);
        assert_eq!(summary.reposts, 3);
        assert_eq!(summary.replies, 4);
        assert_eq!(summary.total, 22);
        assert_eq!(EngagementSummary::from_posts(&[]), EngagementSummary::default());
    }
}
