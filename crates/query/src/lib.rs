//! Request cache and mutation layer for NoteHub listings.
//!
//! Mirrors the request-cache contract the client depends on: listing
//! responses are cached per [`notehub_core::QueryKey`], one request is in
//! flight per key at a time, stale data stays available as a placeholder
//! while a refetch runs, and any successful mutation invalidates every
//! cached listing.

mod cache;
mod debounce;
mod error;
mod source;

pub use cache::{QueryClient, QueryStatus};
pub use debounce::Debouncer;
pub use error::QueryError;
pub use source::NotesSource;
