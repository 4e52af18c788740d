//! Trivia HTTP Server
//!
//! Serves the trivia question bank over a JSON API. The query and quiz logic
//! lives in `trivia-core`; this crate adds routing, configuration and store
//! selection.

pub mod config;
pub mod http;

pub use config::{ConfigError, ServerConfig, StoreBackend};

use std::sync::Arc;
use trivia_core::db::{DatabaseService, InMemoryStore, QuestionStore, TursoStore, DEFAULT_CATEGORIES};

/// Open the configured store, seeding default categories if requested
pub async fn build_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn QuestionStore>> {
    match &config.store {
        StoreBackend::Memory => {
            tracing::info!("📦 Using in-memory store");
            let store = InMemoryStore::new();
            if config.seed_categories {
                for label in DEFAULT_CATEGORIES {
                    store.insert_category(label).await?;
                }
            }
            Ok(Arc::new(store))
        }
        StoreBackend::File(path) => {
            tracing::info!("📦 Database: {}", path.display());
            let db = Arc::new(DatabaseService::new(path.clone()).await?);
            if config.seed_categories {
                db.seed_default_categories().await?;
            }
            Ok(Arc::new(TursoStore::new(db)))
        }
    }
}
