//! Database Connection Management
//!
//! libsql connection handling and schema setup for the question bank.
//!
//! # Schema
//!
//! - `categories(id, type)`
//! - `questions(id, question, answer, category, difficulty)`
//!
//! `questions.category` is TEXT, as in the legacy schema. Queries compare it
//! with `CAST(category AS INTEGER)` and row conversion parses it, so nothing
//! above this layer ever sees a string category id.
//!
//! # Connections
//!
//! Use `connect_with_timeout()` in async code. It sets a 5 second busy
//! timeout so concurrent writers wait instead of failing with `SQLITE_BUSY`.

use crate::db::error::DatabaseError;
use libsql::params::IntoParams;
use libsql::{Builder, Database, Row};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Categories inserted into an empty database
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Columns selected for every question query, in row-conversion order
const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Database service for managing the libsql connection and schema
///
/// # Examples
///
/// ```no_run
/// use trivia_core::db::DatabaseService;
/// use std::path::PathBuf;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let db = DatabaseService::new(PathBuf::from("/tmp/trivia.db")).await?;
///     db.seed_default_categories().await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub db: Arc<Database>,
    pub db_path: PathBuf,
}

impl DatabaseService {
    /// Open (or create) the database at `db_path` and ensure the schema exists
    pub async fn new(db_path: PathBuf) -> Result<Self, DatabaseError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::PermissionDenied {
                        DatabaseError::permission_denied(db_path.clone())
                    } else {
                        DatabaseError::DirectoryCreationFailed(e)
                    }
                })?;
            }
        }

        let db = Builder::new_local(&db_path)
            .build()
            .await
            .map_err(|e| DatabaseError::connection_failed(db_path.clone(), e))?;

        let service = Self {
            db: Arc::new(db),
            db_path,
        };

        service.initialize_schema().await?;
        info!("📦 Database ready at {}", service.db_path.display());

        Ok(service)
    }

    /// PRAGMA statements return rows, so they go through `query()`
    async fn execute_pragma(
        &self,
        conn: &libsql::Connection,
        pragma: &str,
    ) -> Result<(), DatabaseError> {
        let mut stmt = conn.prepare(pragma).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute '{}': {}", pragma, e))
        })?;
        let _ = stmt.query(()).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute '{}': {}", pragma, e))
        })?;
        Ok(())
    }

    /// Create tables with `CREATE TABLE IF NOT EXISTS` (safe to repeat)
    async fn initialize_schema(&self) -> Result<(), DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        self.execute_pragma(&conn, "PRAGMA journal_mode = WAL")
            .await?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| {
            DatabaseError::initialization_failed(format!(
                "Failed to create categories table: {}",
                e
            ))
        })?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category TEXT NOT NULL,
                difficulty INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| {
            DatabaseError::initialization_failed(format!(
                "Failed to create questions table: {}",
                e
            ))
        })?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)",
            (),
        )
        .await
        .map_err(|e| {
            DatabaseError::initialization_failed(format!("Failed to create index: {}", e))
        })?;

        Ok(())
    }

    /// Get a synchronous connection handle.
    ///
    /// Prefer [`connect_with_timeout`](Self::connect_with_timeout) in async code.
    pub fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        self.db.connect().map_err(DatabaseError::LibsqlError)
    }

    /// Get a connection with a 5 second busy timeout
    pub async fn connect_with_timeout(&self) -> Result<libsql::Connection, DatabaseError> {
        let conn = self.connect()?;
        self.execute_pragma(&conn, "PRAGMA busy_timeout = 5000")
            .await?;
        Ok(conn)
    }

    /// Run a query and convert every row with `map_row`.
    ///
    /// A `Row` only reads from the cursor's current step, so each one is
    /// converted before the cursor advances.
    pub async fn db_query_all<T, F>(
        &self,
        sql: &str,
        params: impl IntoParams,
        map_row: F,
    ) -> Result<Vec<T>, DatabaseError>
    where
        F: Fn(&Row) -> Result<T, DatabaseError>,
    {
        self.collect_rows(sql, params, map_row, None).await
    }

    /// Run a query expected to return at most one row
    pub async fn db_query_one<T, F>(
        &self,
        sql: &str,
        params: impl IntoParams,
        map_row: F,
    ) -> Result<Option<T>, DatabaseError>
    where
        F: Fn(&Row) -> Result<T, DatabaseError>,
    {
        Ok(self
            .collect_rows(sql, params, map_row, Some(1))
            .await?
            .into_iter()
            .next())
    }

    async fn collect_rows<T, F>(
        &self,
        sql: &str,
        params: impl IntoParams,
        map_row: F,
        limit: Option<usize>,
    ) -> Result<Vec<T>, DatabaseError>
    where
        F: Fn(&Row) -> Result<T, DatabaseError>,
    {
        let params = params.into_params().map_err(DatabaseError::LibsqlError)?;
        let conn = self.connect_with_timeout().await?;

        let mut stmt = conn.prepare(sql).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to prepare query '{}': {}", sql, e))
        })?;

        let mut rows = stmt.query(params).await.map_err(|e| {
            DatabaseError::sql_execution(format!("Failed to execute query '{}': {}", sql, e))
        })?;

        let mut collected = Vec::new();
        while limit.map_or(true, |max| collected.len() < max) {
            let Some(row) = rows
                .next()
                .await
                .map_err(|e| DatabaseError::sql_execution(e.to_string()))?
            else {
                break;
            };
            collected.push(map_row(&row)?);
        }

        Ok(collected)
    }

    //
    // CATEGORY OPERATIONS
    //

    pub async fn db_list_categories<T>(
        &self,
        map_row: impl Fn(&Row) -> Result<T, DatabaseError>,
    ) -> Result<Vec<T>, DatabaseError> {
        self.db_query_all("SELECT id, type FROM categories ORDER BY id", (), map_row)
            .await
    }

    pub async fn db_get_category<T>(
        &self,
        id: i64,
        map_row: impl Fn(&Row) -> Result<T, DatabaseError>,
    ) -> Result<Option<T>, DatabaseError> {
        self.db_query_one("SELECT id, type FROM categories WHERE id = ?", [id], map_row)
            .await
    }

    /// Insert a category and return its id
    pub async fn db_insert_category(&self, label: &str) -> Result<i64, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.execute("INSERT INTO categories (type) VALUES (?)", [label])
            .await
            .map_err(|e| {
                DatabaseError::sql_execution(format!("Failed to insert category: {}", e))
            })?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert [`DEFAULT_CATEGORIES`] if the category table is empty.
    ///
    /// Returns the number of categories inserted.
    pub async fn seed_default_categories(&self) -> Result<usize, DatabaseError> {
        let existing = self
            .db_query_one("SELECT COUNT(*) FROM categories", (), |row| {
                Ok(row.get::<i64>(0)?)
            })
            .await?
            .unwrap_or(0);

        if existing > 0 {
            debug!("Skipping category seed, {} categories present", existing);
            return Ok(0);
        }

        for label in DEFAULT_CATEGORIES {
            self.db_insert_category(label).await?;
        }

        info!("🌱 Seeded {} default categories", DEFAULT_CATEGORIES.len());
        Ok(DEFAULT_CATEGORIES.len())
    }

    //
    // QUESTION OPERATIONS
    //

    pub async fn db_list_questions<T>(
        &self,
        map_row: impl Fn(&Row) -> Result<T, DatabaseError>,
    ) -> Result<Vec<T>, DatabaseError> {
        self.db_query_all(
            &format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS),
            (),
            map_row,
        )
        .await
    }

    pub async fn db_list_questions_by_category<T>(
        &self,
        category_id: i64,
        map_row: impl Fn(&Row) -> Result<T, DatabaseError>,
    ) -> Result<Vec<T>, DatabaseError> {
        self.db_query_all(
            &format!(
                "SELECT {} FROM questions WHERE CAST(category AS INTEGER) = ? ORDER BY id",
                QUESTION_COLUMNS
            ),
            [category_id],
            map_row,
        )
        .await
    }

    pub async fn db_get_question<T>(
        &self,
        id: i64,
        map_row: impl Fn(&Row) -> Result<T, DatabaseError>,
    ) -> Result<Option<T>, DatabaseError> {
        self.db_query_one(
            &format!("SELECT {} FROM questions WHERE id = ?", QUESTION_COLUMNS),
            [id],
            map_row,
        )
        .await
    }

    /// Insert a question and return its id
    pub async fn db_insert_question(
        &self,
        text: &str,
        answer: &str,
        category_id: i64,
        difficulty: i64,
    ) -> Result<i64, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
            (text, answer, category_id.to_string(), difficulty),
        )
        .await
        .map_err(|e| DatabaseError::sql_execution(format!("Failed to insert question: {}", e)))?;

        Ok(conn.last_insert_rowid())
    }

    /// Delete a question, returning the number of rows removed
    pub async fn db_delete_question(&self, id: i64) -> Result<u64, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.execute("DELETE FROM questions WHERE id = ?", [id])
            .await
            .map_err(|e| DatabaseError::sql_execution(format!("Failed to delete question: {}", e)))
    }
}
