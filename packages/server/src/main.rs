//! Trivia API server binary
//!
//! # Usage
//!
//! ```bash
//! # Default settings (127.0.0.1:5000, ~/.trivia/trivia.db)
//! cargo run --bin trivia-server
//!
//! # In-memory store on another port
//! TRIVIA_DATABASE=memory TRIVIA_PORT=8080 cargo run --bin trivia-server
//! ```
//!
//! See [`trivia_server::config`] for every environment variable.
//! `RUST_LOG` controls logging (default `info`).

use std::sync::Arc;

use trivia_core::QuestionService;
use trivia_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧠 Trivia API");

    let config = ServerConfig::from_env()?;
    let store = trivia_server::build_store(&config).await?;
    let questions = Arc::new(QuestionService::new(store));

    trivia_server::http::start_server(&config, questions).await
}
