//! HTTP error handling
//!
//! Every failure leaves the server as `{success: false, error: <status>, message}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use trivia_core::{ErrorKind, TriviaError};

/// Message returned for processing failures whose detail stays in the logs
pub const PROCESSING_MESSAGE: &str = "Cannot process request.";

/// Uniform error response body
#[derive(Debug, Serialize)]
pub struct HttpError {
    pub success: bool,
    /// HTTP status code, repeated in the body
    pub error: u16,
    /// User-facing error message
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Status code for each failure kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Processing => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::MissingBody => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<TriviaError> for HttpError {
    fn from(err: TriviaError) -> Self {
        let status = status_for(err.kind());

        if err.is_internal() {
            tracing::error!("❌ Request failed: {:?}", err);
            return HttpError::new(status, PROCESSING_MESSAGE);
        }

        tracing::debug!("Request rejected ({}): {}", status, err);
        HttpError::new(status, err.to_string())
    }
}
