//! Business Services
//!
//! - `pagination` - fixed-size pages with out-of-range detection
//! - `filters` - category and substring filters
//! - `quiz` - no-repeat quiz question selection
//! - `validation` - request validation shared by all operations
//! - `QuestionService` - orchestrates the store and the pure core
//!
//! Everything except `QuestionService` is a pure function of its arguments.

pub mod error;
pub mod filters;
pub mod pagination;
pub mod question_service;
pub mod quiz;
pub mod validation;

pub use error::{ErrorKind, TriviaError, TriviaResult};
pub use question_service::{CategoryListing, QuestionListing, QuestionService};
