//! Custom error types for the API service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Custom error type for the API service
///
/// Every variant renders with an empty body; the reason is only logged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request failed validation
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The requested entity does not exist
    #[error("Not found")]
    NotFound,

    /// Storage or other unexpected failure
    #[error("Internal server error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        ApiError::BadRequest(reason.into())
    }

    pub fn internal(reason: &'static str) -> Self {
        ApiError::Internal(anyhow::anyhow!(reason))
    }

    /// HTTP status the error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(reason) => warn!("Rejected request: {}", reason),
            ApiError::NotFound => {}
            ApiError::Internal(e) => error!("Request failed: {:#}", e),
        }

        self.status().into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_errors_render_with_empty_body() {
        let cases = [
            (ApiError::bad_request("Empty Email!"), StatusCode::BAD_REQUEST),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (
                ApiError::internal("store unavailable"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), status);

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(body.is_empty());
        }
    }

    #[test]
    fn test_store_errors_are_internal() {
        let error: ApiError = anyhow::anyhow!("connection refused").into();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
