//! Input validation shared by every operation
//!
//! All checks here run before the store is touched. Required-field checks
//! use JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` all count
//! as missing. A difficulty of `0` is therefore reported as missing rather
//! than out of range.

use crate::models::{
    NewQuestion, QuestionDraft, QuizRequest, QuizScope, QuizState, MAX_DIFFICULTY,
    MIN_DIFFICULTY,
};
use crate::services::error::{TriviaError, TriviaResult};
use serde_json::{Map, Value};

/// Parse a numeric route parameter. Non-numeric and non-positive values are
/// rejected, never coerced.
pub fn parse_path_id(name: &str, raw: &str) -> TriviaResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TriviaError::validation(format!(
            "Invalid {}: '{}' is not a positive integer",
            name, raw
        ))),
    }
}

/// Decode a request body that must be a JSON object
pub fn parse_json_body(bytes: &[u8]) -> TriviaResult<Map<String, Value>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(TriviaError::missing_body("Request body is required"));
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(TriviaError::missing_body("Request body must be a JSON object")),
        Err(e) => Err(TriviaError::missing_body(format!(
            "Request body is not valid JSON: {}",
            e
        ))),
    }
}

/// JSON truthiness
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Read an integer id from a JSON number or a numeric string
pub fn coerce_id(field: &str, value: &Value) -> TriviaResult<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        TriviaError::validation(format!("Invalid {}: expected an integer, got {}", field, value))
    })
}

fn require<'a>(field: &str, value: &'a Option<Value>) -> TriviaResult<&'a Value> {
    match value {
        Some(v) if is_truthy(v) => Ok(v),
        _ => Err(TriviaError::missing_field(field)),
    }
}

fn require_text(field: &str, value: &Option<Value>) -> TriviaResult<String> {
    match require(field, value)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(TriviaError::validation(format!(
            "Invalid {}: expected a string, got {}",
            field, other
        ))),
    }
}

/// Validate a create-question body. The first missing field, in the order
/// question, answer, difficulty, category, determines the error.
pub fn validate_question_draft(draft: &QuestionDraft) -> TriviaResult<NewQuestion> {
    let text = require_text("question", &draft.question)?;
    let answer = require_text("answer", &draft.answer)?;
    let difficulty = require("difficulty", &draft.difficulty)?;
    let category = require("category", &draft.category)?;

    let category_id = coerce_id("category", category)?;
    if category_id < 1 {
        return Err(TriviaError::validation(format!(
            "Invalid category: {} is not a positive integer",
            category_id
        )));
    }

    let difficulty = coerce_id("difficulty", difficulty)?;
    let difficulty = u8::try_from(difficulty)
        .ok()
        .filter(|d| (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(d))
        .ok_or_else(|| {
            TriviaError::validation(format!(
                "Invalid difficulty: {} is not between {} and {}",
                difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
            ))
        })?;

    Ok(NewQuestion {
        text,
        answer,
        category_id,
        difficulty,
    })
}

/// Resolve the category scope of a quiz request.
///
/// Accepts an id, a numeric string, or an object with an `id` field.
/// Absent, `null` and `0` mean all categories.
pub fn parse_quiz_scope(value: Option<&Value>) -> TriviaResult<QuizScope> {
    let id = match value {
        None | Some(Value::Null) => return Ok(QuizScope::All),
        Some(Value::Object(map)) => match map.get("id") {
            None | Some(Value::Null) => return Ok(QuizScope::All),
            Some(id) => coerce_id("quiz_category", id)?,
        },
        Some(other) => coerce_id("quiz_category", other)?,
    };

    if id < 0 {
        return Err(TriviaError::validation(format!(
            "Invalid quiz_category: {} is negative",
            id
        )));
    }

    Ok(QuizScope::from_category_id(id))
}

/// Turn a quiz request into quiz state. A request carrying neither field is
/// a missing body, not an empty quiz.
pub fn parse_quiz_request(request: &QuizRequest) -> TriviaResult<QuizState> {
    if request.previous_questions.is_none() && request.quiz_category.is_none() {
        return Err(TriviaError::missing_body(
            "Quiz request requires previous_questions or quiz_category",
        ));
    }

    let scope = parse_quiz_scope(request.quiz_category.as_ref())?;

    let asked_ids = match &request.previous_questions {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_id("previous_questions", item))
            .collect::<TriviaResult<Vec<_>>>()?,
        Some(other) => {
            return Err(TriviaError::validation(format!(
                "Invalid previous_questions: expected a list of ids, got {}",
                other
            )))
        }
    };

    Ok(QuizState::new(scope, asked_ids))
}
