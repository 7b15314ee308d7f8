//! Create-note form state: focus handling and live validation.

use notehub_core::{FieldErrors, NoteDraft, NoteTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Title,
    Content,
    Tag,
}

pub(crate) struct FormState {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
    pub focus: FormField,
    /// Field-level messages, refreshed on every edit
    pub errors: FieldErrors,
    /// Suppresses error display until the user has typed something
    pub touched: bool,
    pub submitting: bool,
    /// Error from a failed submission; the form stays open
    pub submit_error: Option<String>,
}

impl FormState {
    pub(crate) fn new() -> Self {
        let mut form = Self {
            title: String::new(),
            content: String::new(),
            tag: NoteTag::Todo,
            focus: FormField::Title,
            errors: FieldErrors::default(),
            touched: false,
            submitting: false,
            submit_error: None,
        };
        form.revalidate();
        form
    }

    pub(crate) fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.clone(), self.content.clone(), self.tag)
    }

    pub(crate) fn revalidate(&mut self) {
        self.errors = self.draft().validate().err().unwrap_or_default();
    }

    /// Submission is blocked while invalid or while a request is in flight.
    pub(crate) fn can_submit(&self) -> bool {
        self.errors.is_empty() && !self.submitting
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Content => self.content.push(c),
            FormField::Tag => return,
        }
        self.touched = true;
        self.submit_error = None;
        self.revalidate();
    }

    pub(crate) fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            },
            FormField::Content => {
                self.content.pop();
            },
            FormField::Tag => return,
        }
        self.touched = true;
        self.revalidate();
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Tag,
            FormField::Tag => FormField::Title,
        };
    }

    /// Up/Down cycle through the fixed tag set when the tag row has focus,
    /// so an out-of-set tag cannot be entered at all.
    pub(crate) fn cycle_tag(&mut self, forward: bool) {
        if self.focus != FormField::Tag {
            return;
        }
        self.tag = if forward { self.tag.next() } else { self.tag.prev() };
        self.touched = true;
    }
}
