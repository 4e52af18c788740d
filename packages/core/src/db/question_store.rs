//! QuestionStore Trait - Store Gateway Abstraction
//!
//! The core reads candidate questions through this trait and never talks to a
//! database directly. Two backends implement it:
//!
//! - [`TursoStore`](crate::db::TursoStore) - libsql file database
//! - [`InMemoryStore`](crate::db::InMemoryStore) - process-local, for tests and demos
//!
//! # Examples
//!
//! ```rust,no_run
//! use trivia_core::db::{DatabaseService, QuestionStore, TursoStore};
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Arc::new(DatabaseService::new(PathBuf::from("./data/trivia.db")).await?);
//!     let store: Arc<dyn QuestionStore> = Arc::new(TursoStore::new(db));
//!
//!     for question in store.list_questions().await? {
//!         println!("{}: {}", question.id, question.text);
//!     }
//!     Ok(())
//! }
//! ```

use crate::models::{Category, NewQuestion, Question};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence operations for questions and categories.
///
/// Every list operation returns records ordered by id.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single store can be shared by
/// all request handlers.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    //
    // CATEGORIES
    //

    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// `Ok(None)` when the category does not exist
    async fn get_category(&self, id: i64) -> Result<Option<Category>>;

    async fn insert_category(&self, label: &str) -> Result<Category>;

    //
    // QUESTIONS
    //

    async fn list_questions(&self) -> Result<Vec<Question>>;

    async fn list_questions_by_category(&self, category_id: i64) -> Result<Vec<Question>>;

    /// Questions whose text contains `term`, case-insensitively
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    /// `Ok(None)` when the question does not exist
    async fn get_question(&self, id: i64) -> Result<Option<Question>>;

    /// Insert a question and return it with its store-assigned id
    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;

    /// Delete by id. Returns `false` when nothing was deleted.
    async fn delete_question(&self, id: i64) -> Result<bool>;
}
