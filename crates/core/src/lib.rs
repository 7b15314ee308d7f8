//! Core types and validation for the NoteHub client
//!
//! This crate contains domain types shared across all other crates.

mod draft;
mod error;
mod note;
mod paging;

pub use draft::*;
pub use error::*;
pub use note::*;
pub use paging::*;
