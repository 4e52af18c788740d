//! In-memory QuestionStore
//!
//! Keeps records in process memory behind an async `RwLock`. Category and
//! search queries reuse the core filters so both backends agree on what
//! matches.

use crate::db::question_store::QuestionStore;
use crate::models::{Category, NewQuestion, Question};
use crate::services::filters::{by_category, by_substring};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryState {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_category_id: i64,
    next_question_id: i64,
}

/// Process-local store. Ids are assigned sequentially and never reused.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<MemoryState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records, keeping their ids
    pub fn with_records(
        categories: impl IntoIterator<Item = Category>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let categories: BTreeMap<i64, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();
        let questions: BTreeMap<i64, Question> =
            questions.into_iter().map(|q| (q.id, q)).collect();

        let next_category_id = categories.keys().next_back().copied().unwrap_or(0);
        let next_question_id = questions.keys().next_back().copied().unwrap_or(0);

        Self {
            state: RwLock::new(MemoryState {
                categories,
                questions,
                next_category_id,
                next_question_id,
            }),
        }
    }

    async fn all_questions(&self) -> Vec<Question> {
        self.state.read().await.questions.values().cloned().collect()
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn insert_category(&self, label: &str) -> Result<Category> {
        let mut state = self.state.write().await;
        state.next_category_id += 1;
        let category = Category::new(state.next_category_id, label);
        state.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.all_questions().await)
    }

    async fn list_questions_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        Ok(by_category(self.all_questions().await, category_id))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        Ok(by_substring(self.all_questions().await, term))
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>> {
        Ok(self.state.read().await.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        let mut state = self.state.write().await;
        state.next_question_id += 1;
        let question = question.into_question(state.next_question_id);
        state.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        Ok(self.state.write().await.questions.remove(&id).is_some())
    }
}
