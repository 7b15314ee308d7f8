//! Interactive browser: the view layer over the query cache.
//!
//! Single event loop over three inputs: keystrokes (read on a blocking
//! thread), the search debounce deadline, and finished requests. Listing
//! fetches carry sequence numbers; only the most recent one may update the
//! screen, so rapid key/search changes can never be overwritten by an
//! older response.

mod form;
mod render;
mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use console::{Key, Term};
use notehub_core::{Note, NoteDraft, NotesPage, SEARCH_DEBOUNCE_MS};
use notehub_query::{Debouncer, QueryError};
use tokio::sync::mpsc;

use super::Client;
use form::FormField;
use state::{BrowseState, CreateFailure};

enum Outcome {
    Listing { seq: u64, result: Result<Arc<NotesPage>, String> },
    Created(Result<Note, CreateFailure>),
    Deleted(Result<Note, String>),
}

enum Action {
    Continue,
    Quit,
}

pub(crate) async fn run(client: Arc<Client>) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        anyhow::bail!("browse needs an interactive terminal");
    }
    term.hide_cursor()?;
    let result = event_loop(&term, &client).await;
    term.show_cursor()?;
    term.clear_screen()?;
    result
}

async fn event_loop(term: &Term, client: &Arc<Client>) -> Result<()> {
    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    spawn_key_reader(key_tx);
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();

    let mut state = BrowseState::new();
    let mut debouncer = Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS));
    spawn_listing_fetch(client, &outcome_tx, &mut state);

    loop {
        render::draw(term, &state)?;

        let debounce_due = async {
            match debouncer.deadline() {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            Some(key) = key_rx.recv() => {
                if let Action::Quit = handle_key(key, &mut state, &mut debouncer, client, &outcome_tx) {
                    break;
                }
            },
            Some(outcome) = outcome_rx.recv() => {
                apply_outcome(outcome, &mut state, client, &outcome_tx);
            },
            () = debounce_due => {
                if let Some(settled) = debouncer.fire() {
                    if state.apply_search(settled) {
                        spawn_listing_fetch(client, &outcome_tx, &mut state);
                    }
                }
            },
            else => break,
        }
    }
    Ok(())
}

fn handle_key(
    key: Key,
    state: &mut BrowseState,
    debouncer: &mut Debouncer<String>,
    client: &Arc<Client>,
    outcome_tx: &mpsc::UnboundedSender<Outcome>,
) -> Action {
    if state.form.is_some() {
        handle_form_key(key, state, client, outcome_tx);
        return Action::Continue;
    }

    match key {
        Key::Escape => {
            // Esc first clears an active search, then quits.
            if state.clear_search_input() {
                debouncer.update(state.search_input.clone());
            } else {
                return Action::Quit;
            }
        },
        Key::Char(c) => {
            state.push_search_char(c);
            debouncer.update(state.search_input.clone());
        },
        Key::Backspace => {
            if state.pop_search_char() {
                debouncer.update(state.search_input.clone());
            }
        },
        Key::ArrowRight | Key::PageDown => {
            if state.next_page() {
                spawn_listing_fetch(client, outcome_tx, state);
            }
        },
        Key::ArrowLeft | Key::PageUp => {
            if state.prev_page() {
                spawn_listing_fetch(client, outcome_tx, state);
            }
        },
        Key::ArrowDown => state.select_next(),
        Key::ArrowUp => state.select_prev(),
        Key::Insert => state.open_form(),
        Key::Del => {
            if let Some(note) = state.selected_note() {
                spawn_delete(client, outcome_tx, note.id.clone());
            }
        },
        _ => {},
    }
    Action::Continue
}

fn handle_form_key(
    key: Key,
    state: &mut BrowseState,
    client: &Arc<Client>,
    outcome_tx: &mpsc::UnboundedSender<Outcome>,
) {
    if matches!(key, Key::Escape) {
        state.form = None;
        return;
    }
    let Some(form) = &mut state.form else { return };
    match key {
        Key::Tab => form.focus_next(),
        Key::ArrowDown => form.cycle_tag(true),
        Key::ArrowUp => form.cycle_tag(false),
        Key::Backspace => form.backspace(),
        Key::Enter => {
            form.touched = true;
            form.revalidate();
            if form.can_submit() {
                form.submitting = true;
                form.submit_error = None;
                spawn_create(client, outcome_tx, form.draft());
            }
        },
        // The tag is chosen from the fixed set, not typed.
        Key::Char(_) if form.focus == FormField::Tag => {},
        Key::Char(c) => form.insert_char(c),
        _ => {},
    }
}

fn apply_outcome(
    outcome: Outcome,
    state: &mut BrowseState,
    client: &Arc<Client>,
    outcome_tx: &mpsc::UnboundedSender<Outcome>,
) {
    match outcome {
        Outcome::Listing { seq, result } => {
            state.apply_listing(seq, result);
        },
        Outcome::Created(Ok(note)) => {
            tracing::info!(id = %note.id, "note created");
            state.finish_create_success();
            spawn_listing_fetch(client, outcome_tx, state);
        },
        Outcome::Created(Err(failure)) => state.finish_create_failure(failure),
        Outcome::Deleted(Ok(note)) => {
            tracing::info!(id = %note.id, "note deleted");
            spawn_listing_fetch(client, outcome_tx, state);
        },
        Outcome::Deleted(Err(message)) => state.finish_delete_failure(message),
    }
}

fn spawn_key_reader(tx: mpsc::UnboundedSender<Key>) {
    std::thread::spawn(move || {
        let term = Term::stdout();
        loop {
            match term.read_key() {
                Ok(key) => {
                    if tx.send(key).is_err() {
                        break;
                    }
                },
                Err(_) => break,
            }
        }
    });
}

fn spawn_listing_fetch(
    client: &Arc<Client>,
    tx: &mpsc::UnboundedSender<Outcome>,
    state: &mut BrowseState,
) {
    let seq = state.begin_fetch();
    let key = state.key();
    let client = Arc::clone(client);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch(&key).await.map_err(|e| e.to_string());
        let _ = tx.send(Outcome::Listing { seq, result });
    });
}

fn spawn_create(
    client: &Arc<Client>,
    tx: &mpsc::UnboundedSender<Outcome>,
    draft: NoteDraft,
) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.create(&draft).await.map_err(|e| match e {
            QueryError::Validation(errors) => CreateFailure::Validation(errors),
            QueryError::Api(api) => CreateFailure::Api(api.to_string()),
        });
        let _ = tx.send(Outcome::Created(result));
    });
}

fn spawn_delete(client: &Arc<Client>, tx: &mpsc::UnboundedSender<Outcome>, id: String) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.delete(&id).await.map_err(|e| e.to_string());
        let _ = tx.send(Outcome::Deleted(result));
    });
}
