//! Thin HTTP client for the NoteHub REST API.
//!
//! Three operations: list notes (with page/per-page/search), create a note,
//! delete a note. Request state, caching, and invalidation live one layer
//! up in `notehub-query`; this crate only speaks the wire protocol.

mod client;
mod client_tests;
mod config;
mod error;

pub use client::{ApiClient, truncate};
pub use config::ApiConfig;
pub use error::ApiError;
