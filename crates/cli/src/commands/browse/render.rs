//! Screen composition for the browser. `lines` is pure so layout rules
//! can be asserted without a terminal.

use anyhow::Result;
use console::{Term, style};

use super::form::{FormField, FormState};
use super::state::BrowseState;

const TITLE_WIDTH: usize = 46;

pub(crate) fn draw(term: &Term, state: &BrowseState) -> Result<()> {
    term.clear_screen()?;
    for line in lines(state) {
        term.write_line(&line)?;
    }
    Ok(())
}

pub(crate) fn lines(state: &BrowseState) -> Vec<String> {
    let mut out = Vec::new();
    out.push(format!("{}", style("NoteHub").bold()));
    out.push(format!("Search: {}▏", state.search_input));

    if let Some(error) = &state.error {
        out.push(format!("{}", style(format!("Error: {error}")).red()));
    }
    if state.fetching {
        let marker = if state.loaded_once { "Refreshing…" } else { "Loading…" };
        out.push(format!("{}", style(marker).dim()));
    }
    out.push(String::new());

    if let Some(form) = &state.form {
        out.extend(form_lines(form));
        return out;
    }

    if state.notes.is_empty() {
        if state.loaded_once && !state.fetching {
            out.push(format!("{}", style("No notes found.").dim()));
        }
    } else {
        let width = TITLE_WIDTH;
        for (idx, note) in state.notes.iter().enumerate() {
            let marker = if idx == state.selected { "›" } else { " " };
            let title = console::truncate_str(&note.title, width, "…");
            let tag = format!("{:<8}", note.tag.as_str());
            out.push(format!(
                "{marker} {title:<width$}  {}  {}",
                style(tag).cyan(),
                style(note.updated_at.format("%Y-%m-%d")).dim(),
            ));
        }
    }

    if state.shows_pagination() {
        out.push(String::new());
        out.push(format!("Page {} of {}", state.page, state.total_pages));
    }

    out.push(String::new());
    out.push(format!(
        "{}",
        style("type to search · ←/→ page · ↑/↓ select · Ins new · Del delete · Esc quit").dim()
    ));
    out
}

fn form_lines(form: &FormState) -> Vec<String> {
    let mut out = Vec::new();
    out.push(format!("{}", style("New note").bold()));

    out.push(field_line(form, FormField::Title, "Title", &form.title));
    if let Some(msg) = visible_error(form, form.errors.title) {
        out.push(error_line(msg));
    }

    out.push(field_line(form, FormField::Content, "Content", &form.content));
    if let Some(msg) = visible_error(form, form.errors.content) {
        out.push(error_line(msg));
    }

    out.push(field_line(form, FormField::Tag, "Tag", form.tag.as_str()));
    if let Some(msg) = visible_error(form, form.errors.tag) {
        out.push(error_line(msg));
    }

    if let Some(submit_error) = &form.submit_error {
        out.push(format!("{}", style(format!("Create failed: {submit_error}")).red()));
    }
    if form.submitting {
        out.push(format!("{}", style("Creating…").dim()));
    }

    out.push(String::new());
    out.push(format!(
        "{}",
        style("Tab next field · ↑/↓ tag · Enter create · Esc cancel").dim()
    ));
    out
}

fn field_line(form: &FormState, field: FormField, label: &str, value: &str) -> String {
    let marker = if form.focus == field { "›" } else { " " };
    format!("{marker} {label:<8} {value}")
}

fn visible_error(form: &FormState, message: Option<&'static str>) -> Option<&'static str> {
    if form.touched { message } else { None }
}

fn error_line(message: &str) -> String {
    format!("  {}", style(message).red())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::Utc;
    use notehub_core::{Note, NoteTag, NotesPage};

    fn loaded_state(note_count: usize, total_pages: u32) -> BrowseState {
        let now = Utc::now();
        let notes = (0..note_count)
            .map(|i| Note {
                id: format!("n{i}"),
                title: format!("Note {i}"),
                content: "body".to_owned(),
                tag: NoteTag::Todo,
                created_at: now,
                updated_at: now,
            })
            .collect();
        let mut state = BrowseState::new();
        let seq = state.begin_fetch();
        state.apply_listing(seq, Ok(Arc::new(NotesPage { notes, total_pages })));
        state
    }

    #[test]
    fn pagination_line_appears_only_beyond_one_page() {
        let multi = lines(&loaded_state(12, 3));
        assert!(multi.iter().any(|l| l.contains("Page 1 of 3")));

        let single = lines(&loaded_state(5, 1));
        assert!(!single.iter().any(|l| l.contains("Page")));
    }

    #[test]
    fn untouched_form_hides_required_messages() {
        let mut state = loaded_state(1, 1);
        state.open_form();
        let quiet = lines(&state);
        assert!(!quiet.iter().any(|l| l.contains("Required")));

        let form = state.form.as_mut().unwrap();
        form.insert_char('a');
        form.backspace();
        let loud = lines(&state);
        assert!(loud.iter().any(|l| l.contains("Required")));
    }

    #[test]
    fn listing_error_renders_inline() {
        let mut state = loaded_state(2, 1);
        let seq = state.begin_fetch();
        state.apply_listing(seq, Err("HTTP status 503: down".to_owned()));
        let rendered = lines(&state);
        assert!(rendered.iter().any(|l| l.contains("Error:")));
        // Stale rows stay visible under the error.
        assert!(rendered.iter().any(|l| l.contains("Note 0")));
    }
}
