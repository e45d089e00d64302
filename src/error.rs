//! Error types for the sharing service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Share Error Enum ==
/// Unified error type for the sharing service.
#[derive(Error, Debug)]
pub enum ShareError {
    /// Anchor number is unknown or its entry has expired
    #[error("The anchor number {0} could not be found")]
    NotFound(i64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Token service credentials are missing
    #[error("Token service not configured: {0}")]
    TokenServiceNotConfigured(String),

    /// Identity provider or token endpoint returned an unusable response
    #[error("Token request failed: {0}")]
    TokenService(String),
}

impl ShareError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShareError::NotFound(_) => StatusCode::NOT_FOUND,
            ShareError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ShareError::TokenServiceNotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            ShareError::TokenService(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ShareError {
    fn from(err: reqwest::Error) -> Self {
        ShareError::TokenService(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ShareError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the sharing service.
pub type Result<T> = std::result::Result<T, ShareError>;
