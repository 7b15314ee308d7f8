//! Browser state, kept free of terminal and network concerns so the
//! request/refresh rules can be unit tested.

use std::sync::Arc;

use notehub_core::{Note, NotesPage, QueryKey};

use super::form::FormState;

/// What a finished create attempt reported back.
pub(crate) enum CreateFailure {
    Validation(notehub_core::FieldErrors),
    Api(String),
}

pub(crate) struct BrowseState {
    /// Raw search box contents, updated per keystroke
    pub search_input: String,
    /// Debounced search term currently applied to the query key
    pub search: String,
    /// Current 1-based page
    pub page: u32,
    pub notes: Vec<Note>,
    pub total_pages: u32,
    pub selected: usize,
    pub form: Option<FormState>,
    /// Inline listing/mutation error
    pub error: Option<String>,
    /// Whether any listing has ever resolved (first load vs refetch)
    pub loaded_once: bool,
    pub fetching: bool,
    fetch_seq: u64,
}

impl BrowseState {
    pub(crate) fn new() -> Self {
        Self {
            search_input: String::new(),
            search: String::new(),
            page: 1,
            notes: Vec::new(),
            total_pages: 0,
            selected: 0,
            form: None,
            error: None,
            loaded_once: false,
            fetching: false,
            fetch_seq: 0,
        }
    }

    pub(crate) fn key(&self) -> QueryKey {
        QueryKey::new(self.page, self.search.clone())
    }

    pub(crate) fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
    }

    /// Returns `false` when there was nothing to delete.
    pub(crate) fn pop_search_char(&mut self) -> bool {
        self.search_input.pop().is_some()
    }

    pub(crate) fn clear_search_input(&mut self) -> bool {
        if self.search_input.is_empty() {
            return false;
        }
        self.search_input.clear();
        true
    }

    /// Applies a settled (debounced) search term. A changed term always
    /// resets to page 1. Returns whether a new fetch is needed.
    pub(crate) fn apply_search(&mut self, settled: String) -> bool {
        if settled == self.search {
            return false;
        }
        self.search = settled;
        self.page = 1;
        true
    }

    /// Page changes apply immediately, clamped to the known page count.
    pub(crate) fn next_page(&mut self) -> bool {
        if self.total_pages > 0 && self.page < self.total_pages {
            self.page += 1;
            return true;
        }
        false
    }

    pub(crate) fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            return true;
        }
        false
    }

    /// Registers a new in-flight listing request and returns its sequence
    /// number. Only the most recently issued sequence may apply its result.
    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetching = true;
        self.fetch_seq
    }

    /// Applies a finished listing request. Results from superseded
    /// requests are dropped so an older response can never overwrite a
    /// newer one. Returns whether the result was applied.
    pub(crate) fn apply_listing(
        &mut self,
        seq: u64,
        result: Result<Arc<NotesPage>, String>,
    ) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.fetching = false;
        match result {
            Ok(page) => {
                self.notes = page.notes.clone();
                self.total_pages = page.total_pages;
                self.error = None;
                self.loaded_once = true;
                if self.selected >= self.notes.len() {
                    self.selected = self.notes.len().saturating_sub(1);
                }
            },
            Err(message) => {
                // Previous notes stay on screen; the error renders inline.
                self.error = Some(message);
            },
        }
        true
    }

    /// The page control renders only when there is more than one page.
    pub(crate) fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub(crate) fn select_next(&mut self) {
        if self.selected + 1 < self.notes.len() {
            self.selected += 1;
        }
    }

    pub(crate) fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn selected_note(&self) -> Option<&Note> {
        self.notes.get(self.selected)
    }

    pub(crate) fn open_form(&mut self) {
        if self.form.is_none() {
            self.form = Some(FormState::new());
        }
    }

    /// A successful create closes the form; the caller refetches.
    pub(crate) fn finish_create_success(&mut self) {
        self.form = None;
    }

    /// A failed create keeps the form open and shows what went wrong.
    pub(crate) fn finish_create_failure(&mut self, failure: CreateFailure) {
        if let Some(form) = &mut self.form {
            form.submitting = false;
            match failure {
                CreateFailure::Validation(errors) => form.errors = errors,
                CreateFailure::Api(message) => form.submit_error = Some(message),
            }
        }
    }

    pub(crate) fn finish_delete_failure(&mut self, message: String) {
        self.error = Some(message);
    }
}
