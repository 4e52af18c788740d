//! Question and Category records
//!
//! These are the shapes the store hands back to the core. The core never
//! mutates a record; it filters, slices and picks from owned copies.
//!
//! # JSON shape
//!
//! ```json
//! {"id": 1, "question": "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
//!  "answer": "Maya Angelou", "category": 4, "difficulty": 2}
//! ```

use serde::{Deserialize, Serialize};

/// Lowest accepted difficulty score
pub const MIN_DIFFICULTY: u8 = 1;

/// Highest accepted difficulty score
pub const MAX_DIFFICULTY: u8 = 5;

/// A stored trivia question.
///
/// `id` is assigned by the store on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// Question text, serialized as `question`
    #[serde(rename = "question")]
    pub text: String,

    pub answer: String,

    /// Owning category id, serialized as `category`
    #[serde(rename = "category")]
    pub category_id: i64,

    pub difficulty: u8,
}

/// A validated question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub category_id: i64,
    pub difficulty: u8,
}

impl NewQuestion {
    /// Attach the store-assigned id.
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            text: self.text,
            answer: self.answer,
            category_id: self.category_id,
            difficulty: self.difficulty,
        }
    }
}

/// A question category, serialized as `{id, type}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    #[serde(rename = "type")]
    pub label: String,
}

impl Category {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
