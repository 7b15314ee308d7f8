use notehub_core::{Note, NoteDraft, NotesPage, QueryKey};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Request timeout for all API calls.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the NoteHub REST API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a new API client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url, token: config.token })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of notes.
    ///
    /// Sends `page` and `perPage`; `search` is included only when non-empty,
    /// matching what the backend expects.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable response body.
    pub async fn fetch_notes(&self, key: &QueryKey) -> Result<NotesPage, ApiError> {
        let mut params =
            vec![("page", key.page.to_string()), ("perPage", key.per_page.to_string())];
        if !key.search.is_empty() {
            params.push(("search", key.search.clone()));
        }
        tracing::debug!(page = key.page, search = %key.search, "fetching notes");

        let response = self
            .client
            .get(format!("{}/notes", self.base_url))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await?;
        read_json(response, "notes listing").await
    }

    /// Create a note. Returns the created note as stored by the backend.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable response body.
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        tracing::debug!(tag = %draft.tag, "creating note");
        let response = self
            .client
            .post(format!("{}/notes", self.base_url))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(draft)
            .send()
            .await?;
        read_json(response, "created note").await
    }

    /// Delete a note by id. Returns the deleted note.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable response body.
    pub async fn delete_note(&self, id: &str) -> Result<Note, ApiError> {
        tracing::debug!(id, "deleting note");
        let response = self
            .client
            .delete(format!("{}/notes/{id}", self.base_url))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await?;
        read_json(response, "deleted note").await
    }
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::HttpStatus { code: status.as_u16(), body });
    }
    serde_json::from_str(&body).map_err(|e| ApiError::JsonParse {
        context: format!("{context} (body: {})", truncate(&body, 200)),
        source: e,
    })
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
