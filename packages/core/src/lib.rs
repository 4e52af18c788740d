//! Trivia Core
//!
//! Query shaping and quiz selection for a bank of trivia questions.
//!
//! # Modules
//!
//! - [`models`] - Question, Category, Page and quiz state
//! - [`services`] - paginator, filters, quiz selector, validation and `QuestionService`
//! - [`db`] - `QuestionStore` trait with libsql and in-memory backends
//!
//! The pure components take all of their data as arguments and hold no
//! process-wide state. Quiz progress lives entirely with the client.

pub mod db;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use models::*;
pub use services::*;
