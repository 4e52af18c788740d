//! Health check and routing fallbacks

use axum::{http::Uri, response::Json, routing::get, Router};
use serde::Serialize;

use crate::http::HttpError;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// ```bash
/// curl http://localhost:5000/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Unknown path
pub async fn not_found(uri: Uri) -> HttpError {
    HttpError::not_found(format!("Resource not found: {}", uri.path()))
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> HttpError {
    HttpError::method_not_allowed()
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health_check))
}
