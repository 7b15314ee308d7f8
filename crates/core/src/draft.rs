//! Create-note payload and its client-side validation.
//!
//! Limits and messages match what the backend enforces, so a draft that
//! passes here is accepted by the API barring races.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{CoreError, NoteTag};

/// Minimum title length in characters.
pub const TITLE_MIN: usize = 3;
/// Maximum title length in characters.
pub const TITLE_MAX: usize = 50;
/// Maximum content length in characters.
pub const CONTENT_MAX: usize = 500;

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_TITLE_MIN: &str = "Minimum 3 characters";
pub const MSG_TITLE_MAX: &str = "Maximum 50 characters";
pub const MSG_CONTENT_MAX: &str = "Maximum 500 characters";
pub const MSG_INVALID_TAG: &str = "Invalid tag";

/// Payload for creating a new note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

impl NoteDraft {
    #[must_use]
    pub fn new(title: String, content: String, tag: NoteTag) -> Self {
        Self { title, content, tag }
    }

    /// Builds a draft from raw form input, parsing the tag string.
    ///
    /// # Errors
    /// Returns field-level errors when the tag is not in the fixed set or
    /// the title/content limits are violated.
    pub fn from_input(title: &str, content: &str, tag: &str) -> Result<Self, FieldErrors> {
        let mut errors = field_errors(title, content);
        match NoteTag::from_str(tag) {
            Ok(parsed) => {
                let draft = Self::new(title.to_owned(), content.to_owned(), parsed);
                if errors.is_empty() { Ok(draft) } else { Err(errors) }
            },
            Err(CoreError::InvalidTag | CoreError::Validation(_)) => {
                errors.tag = Some(MSG_INVALID_TAG);
                Err(errors)
            },
        }
    }

    /// Validates title and content against the backend's limits.
    ///
    /// # Errors
    /// Returns field-level errors; an empty error set never escapes.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = field_errors(&self.title, &self.content);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Field-level validation messages. An empty set means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
    pub tag: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }

    /// (field, message) pairs in display order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::new();
        if let Some(msg) = self.title {
            out.push(("title", msg));
        }
        if let Some(msg) = self.content {
            out.push(("content", msg));
        }
        if let Some(msg) = self.tag {
            out.push(("tag", msg));
        }
        out
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> =
            self.entries().iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        f.write_str(&parts.join("; "))
    }
}

// Lengths are counted in characters, not bytes.
fn field_errors(title: &str, content: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    let title_len = title.chars().count();
    if title.trim().is_empty() {
        errors.title = Some(MSG_REQUIRED);
    } else if title_len < TITLE_MIN {
        errors.title = Some(MSG_TITLE_MIN);
    } else if title_len > TITLE_MAX {
        errors.title = Some(MSG_TITLE_MAX);
    }

    if content.trim().is_empty() {
        errors.content = Some(MSG_REQUIRED);
    } else if content.chars().count() > CONTENT_MAX {
        errors.content = Some(MSG_CONTENT_MAX);
    }
    errors
}
