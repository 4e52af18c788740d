//! Question Endpoints
//!
//! - `GET /questions?page=N` - all questions, paginated, with the category list
//! - `POST /questions` - search when the body has a non-empty `searchTerm`,
//!   otherwise create a question
//! - `DELETE /questions/:id` - delete a question

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get},
    Router,
};
use serde::Serialize;
use std::collections::HashMap;
use trivia_core::pagination::parse_page;
use trivia_core::validation::parse_json_body;
use trivia_core::{Category, Question, QuestionsRequest};

use crate::http::system_endpoints::method_not_allowed;
use crate::http::{AppState, HttpError};

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_categories: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: String,
    pub question: Question,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

fn page_param(params: &HashMap<String, String>) -> usize {
    parse_page(params.get("page").map(String::as_str))
}

/// ```bash
/// curl "http://localhost:5000/questions?page=2"
/// ```
async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<QuestionsResponse>, HttpError> {
    let listing = state.questions.questions_page(page_param(&params)).await?;

    Ok(Json(QuestionsResponse {
        success: true,
        total_questions: listing.page.total_items,
        questions: listing.page.items,
        categories: listing.categories,
        current_categories: None,
    }))
}

/// Search or create, depending on the body.
///
/// ```bash
/// # Search
/// curl -X POST http://localhost:5000/questions \
///   -H "Content-Type: application/json" \
///   -d '{"searchTerm": "title"}'
///
/// # Create
/// curl -X POST http://localhost:5000/questions \
///   -H "Content-Type: application/json" \
///   -d '{"question": "Who painted the Mona Lisa?", "answer": "Leonardo da Vinci",
///        "category": 2, "difficulty": 1}'
/// ```
async fn post_questions(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Response, HttpError> {
    let body = parse_json_body(&body)?;

    match QuestionsRequest::from_body(body) {
        QuestionsRequest::Search { term } => {
            let page = state
                .questions
                .search_page(&term, page_param(&params))
                .await?;
            tracing::debug!("🔍 Search '{}' matched {} questions", term, page.total_items);

            Ok(Json(SearchResponse {
                success: true,
                total_questions: page.total_items,
                questions: page.items,
                current_category: None,
            })
            .into_response())
        }
        QuestionsRequest::Create(draft) => {
            let question = state.questions.create_question(&draft).await?;

            Ok((
                StatusCode::CREATED,
                Json(CreatedResponse {
                    success: true,
                    message: "created".to_string(),
                    question,
                }),
            )
                .into_response())
        }
    }
}

/// ```bash
/// curl -X DELETE http://localhost:5000/questions/5
/// ```
async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, HttpError> {
    let deleted = state.questions.delete_question(&id).await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(list_questions)
                .post(post_questions)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/:id",
            delete(delete_question).fallback(method_not_allowed),
        )
        .with_state(state)
}
