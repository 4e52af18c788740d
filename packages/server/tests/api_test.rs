//! Router tests for the trivia JSON API
//!
//! Drives the full axum router (CORS and tracing layers included) with
//! `tower::ServiceExt::oneshot` against an in-memory store.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use trivia_core::db::{InMemoryStore, QuestionStore};
use trivia_core::{Category, Question, QuestionService};
use trivia_server::http::{cors_layer, create_router, AppState};
use trivia_server::{build_store, ServerConfig, StoreBackend};

fn categories() -> Vec<Category> {
    vec![
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]
}

fn question(id: i64, text: &str, category_id: i64) -> Question {
    Question {
        id,
        text: text.to_string(),
        answer: format!("answer {id}"),
        category_id,
        difficulty: 2,
    }
}

/// Test helper: router over the given questions with a fixed quiz seed
fn app_with(questions: Vec<Question>) -> Router {
    let store = Arc::new(InMemoryStore::with_records(categories(), questions));
    let state = AppState::new(Arc::new(QuestionService::new(store)), Some(7));
    create_router(state, cors_layer(None))
}

/// 23 questions; ids 1-3 in category 4, the rest spread over 1-3 and 5-6
fn bank() -> Vec<Question> {
    let mut questions = vec![
        question(1, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4),
        question(2, "What was the title of the 1990 fantasy directed by Tim Burton?", 4),
        question(3, "Which dung beetle was worshipped by the ancient Egyptians?", 4),
    ];
    for id in 4..=23 {
        let category_id = [1, 2, 3, 5, 6][(id as usize) % 5];
        questions.push(question(id, &format!("Filler question {id}"), category_id));
    }
    questions
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn delete(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

fn ids(body: &Value, key: &str) -> Vec<i64> {
    body[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

fn assert_error_body(body: &Value, status: StatusCode) {
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(status.as_u16()));
    assert!(body["message"].is_string());
}

// =========================================================================
// GET /categories
// =========================================================================

#[tokio::test]
async fn test_get_categories() {
    let (status, body) = get(app_with(bank()), "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["categories"].as_array().unwrap().len(), 6);
    assert_eq!(body["categories"][1], json!({"id": 2, "type": "Art"}));
}

// =========================================================================
// GET /questions
// =========================================================================

#[tokio::test]
async fn test_get_questions_first_page() {
    let (status, body) = get(app_with(bank()), "/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(ids(&body, "questions"), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], json!(23));
    assert_eq!(body["categories"].as_array().unwrap().len(), 6);
    assert_eq!(body["current_categories"], Value::Null);
    assert_eq!(
        body["questions"][0],
        json!({
            "id": 1,
            "question": "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "answer": "answer 1",
            "category": 4,
            "difficulty": 2
        })
    );
}

#[tokio::test]
async fn test_get_questions_last_partial_page() {
    let (status, body) = get(app_with(bank()), "/questions?page=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "questions"), vec![21, 22, 23]);
}

#[tokio::test]
async fn test_get_questions_page_out_of_range() {
    let (status, body) = get(app_with(bank()), "/questions?page=4").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, StatusCode::NOT_FOUND);
    assert!(body.get("questions").is_none());
}

#[tokio::test]
async fn test_get_questions_far_page_out_of_range() {
    let (status, _) = get(app_with(bank()), "/questions?page=1000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_questions_bad_page_defaults_to_first() {
    let (status, body) = get(app_with(bank()), "/questions?page=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "questions")[0], 1);
}

#[tokio::test]
async fn test_get_questions_empty_bank() {
    let (status, body) = get(app_with(Vec::new()), "/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["total_questions"], json!(0));
}

// =========================================================================
// GET /categories/:id/questions
// =========================================================================

#[tokio::test]
async fn test_category_questions() {
    let (status, body) = get(app_with(bank()), "/categories/4/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "questions"), vec![1, 2, 3]);
    assert_eq!(body["total_questions"], json!(3));
    assert_eq!(body["current_category"], json!(4));
}

#[tokio::test]
async fn test_category_questions_non_numeric_id() {
    let (status, body) = get(app_with(bank()), "/categories/history/questions").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_category_questions_no_matches() {
    let (status, body) = get(app_with(bank()), "/categories/42/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["current_category"], json!(42));
}

// =========================================================================
// POST /questions
// =========================================================================

#[tokio::test]
async fn test_search_questions() {
    let (status, body) =
        post_json(app_with(bank()), "/questions", json!({"searchTerm": "TITLE"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    // "entitled" contains the term too
    assert_eq!(ids(&body, "questions"), vec![1, 2]);
    assert_eq!(body["total_questions"], json!(2));
    assert_eq!(body["current_category"], Value::Null);
}

#[tokio::test]
async fn test_search_is_paginated() {
    let (status, body) =
        post_json(app_with(bank()), "/questions?page=2", json!({"searchTerm": "filler"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], json!(20));
    assert_eq!(ids(&body, "questions"), (14..=23).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_create_question() {
    let app = app_with(bank());
    let (status, body) = post_json(
        app.clone(),
        "/questions",
        json!({
            "question": "What is the largest lake in Africa?",
            "answer": "Lake Victoria",
            "category": 3,
            "difficulty": 2
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("created"));
    assert_eq!(body["question"]["id"], json!(24));
    assert_eq!(body["question"]["category"], json!(3));

    let (_, listing) = get(app, "/questions?page=3").await;
    assert_eq!(ids(&listing, "questions"), vec![21, 22, 23, 24]);
}

#[tokio::test]
async fn test_create_question_with_string_category() {
    let (status, body) = post_json(
        app_with(bank()),
        "/questions",
        json!({"question": "Q", "answer": "A", "category": "5", "difficulty": 4}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["question"]["category"], json!(5));
}

#[tokio::test]
async fn test_create_question_empty_text_rejected() {
    let (status, body) = post_json(
        app_with(bank()),
        "/questions",
        json!({"question": "", "answer": "a", "category": 1, "difficulty": 3}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("question"));
}

#[tokio::test]
async fn test_create_question_zero_difficulty_rejected() {
    let (status, body) = post_json(
        app_with(bank()),
        "/questions",
        json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("difficulty"));
}

#[tokio::test]
async fn test_empty_search_term_falls_through_to_create() {
    let (status, body) =
        post_json(app_with(bank()), "/questions", json!({"searchTerm": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("question"));
}

#[tokio::test]
async fn test_post_questions_without_body() {
    let request = Request::post("/questions").body(Body::empty()).unwrap();
    let (status, body) = send(app_with(bank()), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_body(&body, StatusCode::INTERNAL_SERVER_ERROR);
}

// =========================================================================
// DELETE /questions/:id
// =========================================================================

#[tokio::test]
async fn test_delete_question_then_again() {
    let app = app_with(bank());

    let (status, body) = delete(app.clone(), "/questions/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": 5}));

    let (status, body) = delete(app.clone(), "/questions/5").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error_body(&body, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, listing) = get(app, "/questions").await;
    assert_eq!(listing["total_questions"], json!(22));
}

#[tokio::test]
async fn test_delete_non_numeric_id() {
    let (status, _) = delete(app_with(bank()), "/questions/five").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =========================================================================
// POST /quizzes
// =========================================================================

#[tokio::test]
async fn test_quiz_returns_only_unseen_question() {
    let (status, body) = post_json(
        app_with(bank()),
        "/quizzes",
        json!({"previous_questions": [2, 3], "quiz_category": 4}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"]["id"], json!(1));
    assert_eq!(ids(&body, "available_questions"), vec![1]);
}

#[tokio::test]
async fn test_quiz_exhausted_returns_null_question() {
    let (status, body) = post_json(
        app_with(bank()),
        "/quizzes",
        json!({"previous_questions": [1, 2, 3], "quiz_category": {"type": "History", "id": "4"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"], Value::Null);
    assert_eq!(body["available_questions"], json!([]));
}

#[tokio::test]
async fn test_quiz_all_categories_never_repeats() {
    let app = app_with(bank());
    let mut asked: Vec<i64> = Vec::new();

    loop {
        let (status, body) = post_json(
            app.clone(),
            "/quizzes",
            json!({"previous_questions": asked, "quiz_category": 0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        match body["question"]["id"].as_i64() {
            Some(id) => {
                assert!(!asked.contains(&id), "question {id} repeated");
                asked.push(id);
            }
            None => break,
        }
    }

    assert_eq!(asked.len(), 23);
}

#[tokio::test]
async fn test_quiz_seeded_selection_is_reproducible() {
    let request = json!({"previous_questions": [1], "quiz_category": null, "extra": true});
    let (_, first) = post_json(app_with(bank()), "/quizzes", request.clone()).await;
    let (_, second) = post_json(app_with(bank()), "/quizzes", request).await;

    assert_eq!(first["question"], second["question"]);
    assert_ne!(first["question"]["id"], json!(1));
}

#[tokio::test]
async fn test_quiz_missing_body() {
    let request = Request::post("/quizzes").body(Body::empty()).unwrap();
    let (status, body) = send(app_with(bank()), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_body(&body, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_quiz_body_without_quiz_fields() {
    let (status, _) = post_json(app_with(bank()), "/quizzes", json!({"unrelated": 1})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_quiz_invalid_category() {
    let (status, body) = post_json(
        app_with(bank()),
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": "science"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, StatusCode::BAD_REQUEST);
}

// =========================================================================
// Routing
// =========================================================================

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = get(app_with(bank()), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/questions")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app_with(bank()), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_error_body(&body, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app_with(Vec::new()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let request = Request::get("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app_with(bank()).oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

// =========================================================================
// Store selection
// =========================================================================

#[tokio::test]
async fn test_file_store_seeds_categories_and_serves_them() {
    let temp_dir = TempDir::new().unwrap();
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        store: StoreBackend::File(temp_dir.path().join("trivia.db")),
        cors_origins: None,
        quiz_seed: Some(1),
        seed_categories: true,
    };

    let store = build_store(&config).await.unwrap();
    let state = AppState::new(Arc::new(QuestionService::new(store)), config.quiz_seed);
    let app = create_router(state, cors_layer(None));

    let (status, body) = get(app.clone(), "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 6);

    let (status, created) = post_json(
        app.clone(),
        "/questions",
        json!({"question": "Which country won the first World Cup?", "answer": "Uruguay", "category": 6, "difficulty": 4}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, quiz) = post_json(
        app,
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": 6}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quiz["question"], created["question"]);
}

#[tokio::test]
async fn test_memory_store_seeding_can_be_disabled() {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        store: StoreBackend::Memory,
        cors_origins: None,
        quiz_seed: None,
        seed_categories: false,
    };

    let store = build_store(&config).await.unwrap();
    assert!(store.list_categories().await.unwrap().is_empty());
}
