//! Listing query identity and pagination.

use serde::{Deserialize, Serialize};

use crate::Note;

/// Page size the reference client uses for listings.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// How long search input must stay unchanged before it reaches the query key.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Identity of one cached listing request.
///
/// `search` is the debounced value; raw keystrokes never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    /// 1-based page number
    pub page: u32,
    /// Notes per page
    pub per_page: u32,
    /// Debounced search term, empty when not searching
    pub search: String,
}

impl QueryKey {
    #[must_use]
    pub fn new(page: u32, search: impl Into<String>) -> Self {
        Self { page, per_page: DEFAULT_PER_PAGE, search: search.into() }
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

/// One page of listing results as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesPage {
    pub notes: Vec<Note>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Number of pages needed for `total_notes` at the given page size.
#[must_use]
pub fn total_pages(total_notes: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    u32::try_from(total_notes.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
}
