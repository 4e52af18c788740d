//! Quiz Endpoint
//!
//! - `POST /quizzes` - next unseen question for the client-carried quiz state
//!
//! The client resends `previous_questions` on every call. An exhausted pool
//! is still a 200 with `question: null`.

use axum::{
    body::Bytes,
    extract::State,
    response::Json,
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::Value;
use trivia_core::validation::parse_json_body;
use trivia_core::{Question, QuizOutcome, QuizRequest, TriviaError};

use crate::http::system_endpoints::method_not_allowed;
use crate::http::{AppState, HttpError};

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    pub available_questions: Vec<Question>,
}

/// ```bash
/// curl -X POST http://localhost:5000/quizzes \
///   -H "Content-Type: application/json" \
///   -d '{"previous_questions": [2, 3], "quiz_category": 4}'
/// ```
async fn next_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QuizResponse>, HttpError> {
    let body = parse_json_body(&body)?;
    let request: QuizRequest = serde_json::from_value(Value::Object(body))
        .map_err(|e| TriviaError::missing_body(format!("Malformed quiz request: {}", e)))?;

    let mut rng = state.quiz_rng();
    let outcome = state
        .questions
        .next_quiz_question(&request, &mut rng)
        .await?;

    let response = match outcome {
        QuizOutcome::Next {
            question,
            available,
        } => QuizResponse {
            success: true,
            question: Some(question),
            available_questions: available,
        },
        QuizOutcome::Exhausted => QuizResponse {
            success: true,
            question: None,
            available_questions: Vec::new(),
        },
    };

    Ok(Json(response))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question).fallback(method_not_allowed))
        .with_state(state)
}
