//! Raw request payloads
//!
//! Fields are kept as untyped JSON so that validation can apply the
//! falsy-means-missing rule before any type conversion.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `POST /questions` on the create branch
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuestionDraft {
    pub question: Option<Value>,
    pub answer: Option<Value>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuizRequest {
    pub previous_questions: Option<Value>,
    pub quiz_category: Option<Value>,
}

/// The two meanings of `POST /questions`
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionsRequest {
    Search { term: String },
    Create(QuestionDraft),
}

impl QuestionsRequest {
    /// Branch on `searchTerm`: a non-empty string searches, anything else creates.
    pub fn from_body(mut body: Map<String, Value>) -> Self {
        match body.remove("searchTerm") {
            Some(Value::String(term)) if !term.is_empty() => Self::Search { term },
            _ => Self::Create(QuestionDraft {
                question: body.remove("question"),
                answer: body.remove("answer"),
                category: body.remove("category"),
                difficulty: body.remove("difficulty"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_search_term_selects_search_branch() {
        let request = QuestionsRequest::from_body(object(json!({"searchTerm": "title"})));
        assert_eq!(
            request,
            QuestionsRequest::Search {
                term: "title".to_string()
            }
        );
    }

    #[test]
    fn test_empty_search_term_means_create() {
        let request = QuestionsRequest::from_body(object(json!({
            "searchTerm": "",
            "question": "Q",
            "answer": "A",
            "category": 1,
            "difficulty": 2
        })));

        match request {
            QuestionsRequest::Create(draft) => {
                assert_eq!(draft.question, Some(json!("Q")));
                assert_eq!(draft.difficulty, Some(json!(2)));
            }
            other => panic!("expected create branch, got {other:?}"),
        }
    }

    #[test]
    fn test_quiz_request_fields_default_to_none() {
        let request: QuizRequest = serde_json::from_value(json!({"quiz_category": 3})).unwrap();
        assert_eq!(request.previous_questions, None);
        assert_eq!(request.quiz_category, Some(json!(3)));
    }
}
