//! Service Layer Error Types
//!
//! Every failure the core can report, grouped into the kinds the HTTP
//! boundary translates to status codes. Components return these; none of
//! them swallow an error.

use thiserror::Error;

/// Coarse failure class used by the boundary to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing required input (400)
    Validation,
    /// Resource or page absent (404)
    NotFound,
    /// Accepted request that failed while being processed (422)
    Processing,
    /// Request required a body and had none (500)
    MissingBody,
}

/// Trivia operation errors
#[derive(Error, Debug)]
pub enum TriviaError {
    /// Input failed validation before any store access
    #[error("{0}")]
    Validation(String),

    /// Requested page lies beyond the last page
    #[error("Page {page} is out of range (last page is {last_page})")]
    PageOutOfRange { page: usize, last_page: usize },

    /// Generic missing resource
    #[error("{0}")]
    NotFound(String),

    /// Question id does not exist (reported as a processing failure)
    #[error("Question {id} does not exist")]
    QuestionNotFound { id: i64 },

    /// Request was accepted but could not be completed
    #[error("{0}")]
    Processing(String),

    /// Required request body absent or unreadable
    #[error("{0}")]
    MissingBody(String),

    /// Store operation failed
    #[error("Store operation failed: {0}")]
    Store(#[from] anyhow::Error),
}

impl TriviaError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("Missing required field: {}", field))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing(msg.into())
    }

    pub fn missing_body(msg: impl Into<String>) -> Self {
        Self::MissingBody(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::PageOutOfRange { .. } | Self::NotFound(_) => ErrorKind::NotFound,
            Self::QuestionNotFound { .. } | Self::Processing(_) | Self::Store(_) => {
                ErrorKind::Processing
            }
            Self::MissingBody(_) => ErrorKind::MissingBody,
        }
    }

    /// Store failures carry internal detail that should not reach clients
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

pub type TriviaResult<T> = Result<T, TriviaError>;
