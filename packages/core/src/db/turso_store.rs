//! TursoStore - QuestionStore Implementation for libsql
//!
//! Thin wrapper around [`DatabaseService`]: the SQL lives there, this type
//! converts rows into models. Search runs the core substring filter over
//! the full list so case folding matches the in-memory store.
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
//!     let store = TursoStore::new(db);
//!     let categories = store.list_categories().await?;
//!     println!("{} categories", categories.len());
//!     Ok(())
//! }
//! ```

use crate::db::error::DatabaseError;
use crate::db::question_store::QuestionStore;
use crate::db::DatabaseService;
use crate::models::{Category, NewQuestion, Question};
use crate::services::filters::by_substring;
use anyhow::{Context, Result};
use async_trait::async_trait;
use libsql::Row;
use std::sync::Arc;

/// QuestionStore backed by a libsql database file
pub struct TursoStore {
    db: Arc<DatabaseService>,
}

impl TursoStore {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Arc<DatabaseService> {
        &self.db
    }

    /// Convert a `categories` row (`id, type`)
    fn row_to_category(row: &Row) -> Result<Category, DatabaseError> {
        let id: i64 = row.get(0)?;
        let label: String = row.get(1)?;
        Ok(Category { id, label })
    }

    /// Convert a `questions` row (`id, question, answer, category, difficulty`).
    ///
    /// The legacy TEXT category column is parsed into an integer id here.
    fn row_to_question(row: &Row) -> Result<Question, DatabaseError> {
        let id: i64 = row.get(0)?;
        let text: String = row.get(1)?;
        let answer: String = row.get(2)?;
        let category_raw: String = row.get(3)?;
        let difficulty_raw: i64 = row.get(4)?;

        let category_id = category_raw
            .trim()
            .parse::<i64>()
            .map_err(|_| DatabaseError::invalid_column("questions.category", &category_raw))?;

        let difficulty = u8::try_from(difficulty_raw).map_err(|_| {
            DatabaseError::invalid_column("questions.difficulty", difficulty_raw.to_string())
        })?;

        Ok(Question {
            id,
            text,
            answer,
            category_id,
            difficulty,
        })
    }
}

#[async_trait]
impl QuestionStore for TursoStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.db
            .db_list_categories(Self::row_to_category)
            .await
            .context("Failed to list categories")
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>> {
        self.db
            .db_get_category(id, Self::row_to_category)
            .await
            .context("Failed to get category")
    }

    async fn insert_category(&self, label: &str) -> Result<Category> {
        let id = self
            .db
            .db_insert_category(label)
            .await
            .context("Failed to insert category")?;
        Ok(Category::new(id, label))
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        self.db
            .db_list_questions(Self::row_to_question)
            .await
            .context("Failed to list questions")
    }

    async fn list_questions_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        self.db
            .db_list_questions_by_category(category_id, Self::row_to_question)
            .await
            .with_context(|| format!("Failed to list questions in category {}", category_id))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let questions = self.list_questions().await.context("Failed to search questions")?;
        Ok(by_substring(questions, term))
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>> {
        self.db
            .db_get_question(id, Self::row_to_question)
            .await
            .context("Failed to get question")
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        let id = self
            .db
            .db_insert_question(
                &question.text,
                &question.answer,
                question.category_id,
                i64::from(question.difficulty),
            )
            .await
            .context("Failed to insert question")?;

        Ok(question.into_question(id))
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        let removed = self
            .db
            .db_delete_question(id)
            .await
            .context("Failed to delete question")?;
        Ok(removed > 0)
    }
}
