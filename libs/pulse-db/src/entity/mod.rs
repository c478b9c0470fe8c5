pub mod dev_activity;
pub mod project;
pub mod score;
pub mod signal;
pub mod social;

// Re-exports for convenience
pub use dev_activity::DevActivity;
pub use project::{Project, ProjectRecord, ProjectRow, TvlBasis};
pub use score::ProjectScore;
pub use signal::{Signal, SignalMetrics, SignalType};
pub use social::SocialMetrics;
