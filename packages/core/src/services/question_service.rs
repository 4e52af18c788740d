//! QuestionService - Orchestration Layer
//!
//! One method per external operation. Each method validates its input,
//! fetches the candidate set from the [`QuestionStore`], then hands it to the
//! pure core (filters, paginator, quiz selector).

use crate::db::QuestionStore;
use crate::models::{Category, Page, Question, QuestionDraft, QuizOutcome, QuizRequest, QuizScope};
use crate::services::error::{TriviaError, TriviaResult};
use crate::services::filters::parse_category_id;
use crate::services::pagination::paginate;
use crate::services::quiz::select_next;
use crate::services::validation::{parse_path_id, parse_quiz_request, validate_question_draft};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Page of all questions plus the category list shown beside it
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionListing {
    pub page: Page<Question>,
    pub categories: Vec<Category>,
}

/// Page of one category's questions
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    pub category_id: i64,
    pub page: Page<Question>,
}

pub struct QuestionService {
    store: Arc<dyn QuestionStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn QuestionStore> {
        &self.store
    }

    #[instrument(skip(self))]
    pub async fn categories(&self) -> TriviaResult<Vec<Category>> {
        Ok(self.store.list_categories().await?)
    }

    #[instrument(skip(self))]
    pub async fn questions_page(&self, page: usize) -> TriviaResult<QuestionListing> {
        let questions = self.store.list_questions().await?;
        let page = paginate(questions, page)?;
        let categories = self.store.list_categories().await?;

        debug!(
            "Listing page {} of {} questions",
            page.page_number, page.total_items
        );
        Ok(QuestionListing { page, categories })
    }

    /// A category with no questions yields an empty first page, not an error
    #[instrument(skip(self))]
    pub async fn category_page(
        &self,
        raw_category_id: &str,
        page: usize,
    ) -> TriviaResult<CategoryListing> {
        let category_id = parse_category_id(raw_category_id)?;
        let questions = self.store.list_questions_by_category(category_id).await?;

        Ok(CategoryListing {
            category_id,
            page: paginate(questions, page)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn search_page(&self, term: &str, page: usize) -> TriviaResult<Page<Question>> {
        if term.is_empty() {
            return Err(TriviaError::validation("searchTerm must not be empty"));
        }

        let questions = self.store.search_questions(term).await?;
        paginate(questions, page)
    }

    #[instrument(skip(self))]
    pub async fn create_question(&self, draft: &QuestionDraft) -> TriviaResult<Question> {
        let new_question = validate_question_draft(draft)?;

        if self
            .store
            .get_category(new_question.category_id)
            .await?
            .is_none()
        {
            return Err(TriviaError::validation(format!(
                "Category {} does not exist",
                new_question.category_id
            )));
        }

        let question = self.store.insert_question(new_question).await?;
        info!("✅ Created question {}", question.id);
        Ok(question)
    }

    /// Delete by id. An id that is already gone is a failure, so repeating
    /// a delete never looks like a success.
    #[instrument(skip(self))]
    pub async fn delete_question(&self, raw_id: &str) -> TriviaResult<i64> {
        let id = parse_path_id("question id", raw_id)?;

        if self.store.get_question(id).await?.is_none() {
            return Err(TriviaError::QuestionNotFound { id });
        }

        if !self.store.delete_question(id).await? {
            return Err(TriviaError::QuestionNotFound { id });
        }

        info!("🗑️ Deleted question {}", id);
        Ok(id)
    }

    /// Draw the next quiz question for the client-supplied state.
    ///
    /// The random source is supplied per call; the service keeps no quiz state.
    #[instrument(skip(self, rng))]
    pub async fn next_quiz_question<R: Rng + Send>(
        &self,
        request: &QuizRequest,
        rng: &mut R,
    ) -> TriviaResult<QuizOutcome> {
        let state = parse_quiz_request(request)?;

        let pool = match state.scope {
            QuizScope::All => self.store.list_questions().await?,
            QuizScope::Category(category_id) => {
                self.store.list_questions_by_category(category_id).await?
            }
        };

        let outcome = select_next(pool, &state, rng);
        match outcome.question() {
            Some(question) => debug!(
                "Quiz drew question {} ({} previously asked)",
                question.id,
                state.asked_ids.len()
            ),
            None => debug!("Quiz exhausted after {} questions", state.asked_ids.len()),
        }

        Ok(outcome)
    }
}
