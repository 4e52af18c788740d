//! Database Layer
//!
//! The store gateway the core reads questions and categories through:
//!
//! - [`QuestionStore`] - persistence trait used by `QuestionService`
//! - [`TursoStore`] / [`DatabaseService`] - libsql file database
//! - [`InMemoryStore`] - process-local backend

mod database;
mod error;
mod memory_store;
mod question_store;
mod turso_store;

pub use database::{DatabaseService, DEFAULT_CATEGORIES};
pub use error::DatabaseError;
pub use memory_store::InMemoryStore;
pub use question_store::QuestionStore;
pub use turso_store::TursoStore;
