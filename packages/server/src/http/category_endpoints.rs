//! Category Endpoints
//!
//! - `GET /categories` - all categories
//! - `GET /categories/:id/questions?page=N` - one category's questions, paginated

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use std::collections::HashMap;
use trivia_core::pagination::parse_page;
use trivia_core::{Category, Question};

use crate::http::system_endpoints::method_not_allowed;
use crate::http::{AppState, HttpError};

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}

/// ```bash
/// curl http://localhost:5000/categories
/// ```
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, HttpError> {
    let categories = state.questions.categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// A non-numeric `:id` is rejected before the store is queried.
///
/// ```bash
/// curl "http://localhost:5000/categories/3/questions?page=1"
/// ```
async fn category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<CategoryQuestionsResponse>, HttpError> {
    let page = parse_page(params.get("page").map(String::as_str));
    let listing = state.questions.category_page(&category_id, page).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: listing.page.total_items,
        questions: listing.page.items,
        current_category: listing.category_id,
    }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/categories",
            get(list_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/:id/questions",
            get(category_questions).fallback(method_not_allowed),
        )
        .with_state(state)
}
