//! Category and search filters
//!
//! Both filters keep source order and never rank.

use crate::models::Question;
use crate::services::error::TriviaResult;
use crate::services::validation::parse_path_id;

/// Parse a category id arriving as a path segment or query value
pub fn parse_category_id(raw: &str) -> TriviaResult<i64> {
    parse_path_id("category id", raw)
}

/// Questions belonging to `category_id`
pub fn by_category(items: Vec<Question>, category_id: i64) -> Vec<Question> {
    items
        .into_iter()
        .filter(|question| question.category_id == category_id)
        .collect()
}

/// Questions whose text contains `term`, ignoring case.
///
/// Callers must not pass an empty term: an empty term means no search was
/// requested, not "match everything".
pub fn by_substring(items: Vec<Question>, term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|question| question.text.to_lowercase().contains(&needle))
        .collect()
}
