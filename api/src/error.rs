use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_feeds::FeedError;
use serde_json::json;
use thiserror::Error;

/// Error responses, rendered as `{"error": "<message>"}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Map an upstream feed failure; `context` is the message returned for
    /// unexpected failures.
    pub fn upstream(context: &str, err: &FeedError) -> ApiError {
        match err {
            FeedError::NotConfigured(_) => ApiError::Unavailable(err.to_string()),
            FeedError::InvalidHandle(_) => ApiError::BadRequest(err.to_string()),
            _ => ApiError::Internal(context.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_mapping() {
        let err = ApiError::upstream(
            "Failed to fetch mentions",
            &FeedError::NotConfigured("TWITTER_BEARER_TOKEN"),
        );
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);

        let err = ApiError::upstream(
            "Failed to fetch mentions",
            &FeedError::Status {
                status: 429,
                body: "Too Many Requests".to_string(),
            },
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to fetch mentions");

        let err = ApiError::upstream("x", &FeedError::InvalidHandle("a b".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
