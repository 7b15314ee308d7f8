//! Typed error enum for the API crate.

use thiserror::Error;

/// Errors from NoteHub API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("missing configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether this error is transient and worth a user retry.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}
