//! Data Models
//!
//! - `Question` / `Category` - records owned by the store
//! - `Page` - derived view over an ordered result set
//! - `QuizState` / `QuizOutcome` - client-carried quiz progress
//! - `QuestionDraft` / `QuizRequest` - raw request payloads awaiting validation

mod page;
mod question;
mod quiz;
mod requests;

pub use page::{Page, PAGE_SIZE};
pub use question::{Category, NewQuestion, Question, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use quiz::{QuizOutcome, QuizScope, QuizState};
pub use requests::{QuestionDraft, QuestionsRequest, QuizRequest};
