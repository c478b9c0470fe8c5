use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Upstream not configured: set `{0}`")]
    NotConfigured(&'static str),

    #[error("Invalid feed address: `{0}`")]
    InvalidAddress(String),

    #[error("Invalid handle: `{0}`")]
    InvalidHandle(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Upstream timed out after {0}s")]
    Timeout(u64),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl FeedError {
    /// True when the upstream was never configured, as opposed to failing
    pub fn is_not_configured(&self) -> bool {
        matches!(self, FeedError::NotConfigured(_))
    }
}
