//! Client-carried quiz state
//!
//! The server keeps nothing between quiz calls. Every request carries the
//! full set of already-asked ids and the category scope, and the response
//! either names the next question or reports that the pool is exhausted.

use super::Question;
use std::collections::HashSet;

/// Category restriction applied to quiz candidate selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizScope {
    /// Unrestricted (category value absent or 0 on the wire)
    #[default]
    All,
    Category(i64),
}

impl QuizScope {
    /// Map a wire category id to a scope, treating 0 as "all"
    pub fn from_category_id(category_id: i64) -> Self {
        if category_id == 0 {
            Self::All
        } else {
            Self::Category(category_id)
        }
    }

    pub fn category_id(&self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(*id),
        }
    }
}

/// Caller-supplied quiz progress
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    pub scope: QuizScope,
    pub asked_ids: HashSet<i64>,
}

impl QuizState {
    pub fn new(scope: QuizScope, asked_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            scope,
            asked_ids: asked_ids.into_iter().collect(),
        }
    }

    /// State after `question` has been asked
    pub fn advance(&self, question: &Question) -> Self {
        let mut asked_ids = self.asked_ids.clone();
        asked_ids.insert(question.id);
        Self {
            scope: self.scope,
            asked_ids,
        }
    }
}

/// Result of one quiz draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// A question was drawn from `available`, the unseen pool for this draw
    Next {
        question: Question,
        available: Vec<Question>,
    },
    /// Every candidate in scope has been asked
    Exhausted,
}

impl QuizOutcome {
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Next { question, .. } => Some(question),
            Self::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
