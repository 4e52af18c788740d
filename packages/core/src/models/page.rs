//! Page of an ordered result set

use serde::Serialize;

/// Fixed number of items per page
pub const PAGE_SIZE: usize = 10;

/// A bounded, ordered slice of a larger result set.
///
/// `page_number` is 1-indexed. `items.len()` never exceeds `page_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Number of pages needed to hold `total_items` (zero when empty)
    pub fn last_page(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
