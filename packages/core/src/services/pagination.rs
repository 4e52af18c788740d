//! Fixed-size pagination
//!
//! `paginate` slices an ordered sequence into pages of [`PAGE_SIZE`] and
//! rejects pages past the end. An empty sequence still has a valid (empty)
//! first page.

use crate::models::{Page, PAGE_SIZE};
use crate::services::error::{TriviaError, TriviaResult};

/// Parse the `page` query parameter permissively: anything that is not a
/// positive integer falls back to page 1.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Return page `page_number` (1-indexed) of `items`.
///
/// # Errors
///
/// `TriviaError::PageOutOfRange` when `page_number` is past the last page,
/// except that page 1 of an empty sequence is an empty page.
pub fn paginate<T>(items: Vec<T>, page_number: usize) -> TriviaResult<Page<T>> {
    let page_number = page_number.max(1);
    let total_items = items.len();
    let last_page = total_items.div_ceil(PAGE_SIZE);

    if page_number > last_page.max(1) {
        return Err(TriviaError::PageOutOfRange {
            page: page_number,
            last_page,
        });
    }

    let start = (page_number - 1) * PAGE_SIZE;
    let items = items.into_iter().skip(start).take(PAGE_SIZE).collect();

    Ok(Page {
        items,
        page_number,
        page_size: PAGE_SIZE,
        total_items,
    })
}
