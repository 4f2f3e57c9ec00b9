//! API error type: every failure renders as `{"error": "..."}`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request input, rejected before any chain call.
    #[error("{0}")]
    BadRequest(String),

    /// An upstream call (RPC, oracle) failed or returned an unexpected
    /// shape.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!(status = %self.status_code(), error = %self, "request failed");
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
