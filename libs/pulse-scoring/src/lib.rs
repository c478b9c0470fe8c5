//! ChainPulse scoring
//!
//! Pure functions that turn raw project and social figures into the numbers
//! the dashboard ranks projects by:
//! - Project Score: weighted linear combination of onchain fundamentals
//! - Engagement Score (0-100): weighted social engagement over a time window
//! - Hype / fundamentals labels derived from mentions and score

pub mod aggregate;
pub mod classify;
pub mod engagement;
pub mod project_score;
pub mod window;

pub use aggregate::{summarize, ChainSummary, PortfolioSummary};
pub use classify::{signal_flag, Fundamentals, HypeLevel, ScoreBand};
pub use engagement::{compute_engagement_score, EngagementSummary, SocialPost};
pub use project_score::{compute_score, ProjectMetrics};
pub use window::{TimeWindow, WindowError};
