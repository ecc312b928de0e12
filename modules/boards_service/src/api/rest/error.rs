//! HTTP error mapping to `{"error": ...}` JSON bodies

use crate::contract::BoardsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Whether internal failures carry the driver message in the response body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDetail {
    #[default]
    Hidden,
    Exposed,
}

/// JSON error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Short human-readable message, e.g. "Board not found"
    #[schema(example = "Board not found")]
    pub error: String,

    /// Underlying failure, development mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Error response: a status code plus an [`ErrorBody`]
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
                detail: None,
            },
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.body.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Map domain errors to HTTP responses
pub fn map_domain_error(error: BoardsError, detail: ErrorDetail) -> ApiError {
    match error {
        BoardsError::NotFound { .. } => ApiError::new(StatusCode::NOT_FOUND, error.to_string()),

        BoardsError::Internal { detail: message } => {
            let api_error =
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            match detail {
                ErrorDetail::Exposed => api_error.with_detail(message),
                ErrorDetail::Hidden => api_error,
            }
        }
    }
}
