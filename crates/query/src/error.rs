//! Typed error enum for the query layer.
//!
//! Unifies API transport failures and client-side validation failures into
//! a single error type, so the view layer can match on the failure mode
//! instead of inspecting strings.

use notehub_api::ApiError;
use notehub_core::FieldErrors;
use thiserror::Error;

/// Query-layer error unifying API and validation failures.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The HTTP call failed (transport, status, or parse).
    #[error("api: {0}")]
    Api(#[from] ApiError),

    /// The draft was rejected client-side before any request was sent.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
}

impl QueryError {
    /// Whether this error is likely transient (worth retrying).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Api(e) => e.is_transient(),
            Self::Validation(_) => false,
        }
    }

    /// Field-level messages when this is a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Api(_) => None,
        }
    }
}
