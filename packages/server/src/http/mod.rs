//! JSON HTTP API
//!
//! Maps HTTP verbs and paths onto [`QuestionService`] and translates its
//! typed failures into the uniform error body.
//!
//! # Architecture
//!
//! Endpoints are grouped into modules, each contributing a router merged here:
//! - `category_endpoints`: category list and per-category questions
//! - `question_endpoints`: listing, search/create, delete
//! - `quiz_endpoints`: next quiz question
//! - `system_endpoints`: health check and fallbacks
//!
//! # Usage
//!
//! ```bash
//! TRIVIA_DATABASE=memory cargo run --bin trivia-server
//! ```

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use trivia_core::QuestionService;

use crate::config::ServerConfig;

mod category_endpoints;
mod http_error;
mod question_endpoints;
mod quiz_endpoints;
mod system_endpoints;

pub use http_error::{status_for, HttpError, PROCESSING_MESSAGE};

/// Application state shared across all endpoints
///
/// Holds no per-client data. Quiz progress travels with each request.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<QuestionService>,
    /// When set, every quiz request draws from an RNG seeded with this value
    pub quiz_seed: Option<u64>,
}

impl AppState {
    pub fn new(questions: Arc<QuestionService>, quiz_seed: Option<u64>) -> Self {
        Self {
            questions,
            quiz_seed,
        }
    }

    /// Fresh random source for a single quiz request
    pub fn quiz_rng(&self) -> StdRng {
        match self.quiz_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Create the main application router with all endpoint modules
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(category_endpoints::routes(state.clone()))
        .merge(question_endpoints::routes(state.clone()))
        .merge(quiz_endpoints::routes(state))
        .merge(system_endpoints::routes())
        .fallback(system_endpoints::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS layer: any origin when `origins` is `None`, otherwise the given list
pub fn cors_layer(origins: Option<&[HeaderValue]>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(false);

    match origins {
        Some(origins) => layer.allow_origin(origins.to_vec()),
        None => layer.allow_origin(Any),
    }
}

/// Start the HTTP server and run until Ctrl-C
///
/// # Errors
///
/// Returns error if the server fails to bind or stops unexpectedly.
pub async fn start_server(
    config: &ServerConfig,
    questions: Arc<QuestionService>,
) -> anyhow::Result<()> {
    let state = AppState::new(questions, config.quiz_seed);
    let app = create_router(state, cors_layer(config.cors_origins.as_deref()));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 Trivia API listening on http://{}", listener.local_addr()?);
    match &config.cors_origins {
        Some(origins) => tracing::info!("📡 CORS enabled for {:?}", origins),
        None => tracing::info!("📡 CORS enabled for any origin"),
    }
    if let Some(seed) = config.quiz_seed {
        tracing::info!("🎲 Quiz selection seeded with {}", seed);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
