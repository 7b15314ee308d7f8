use crate::ApiError;

/// Default NoteHub API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://notehub-api.goit.study";

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), token: token.into() }
    }

    /// Reads `NOTEHUB_API_URL` (optional) and `NOTEHUB_TOKEN` (required).
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when the token is not set.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url =
            std::env::var("NOTEHUB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let token = std::env::var("NOTEHUB_TOKEN").map_err(|_| {
            ApiError::Config("NOTEHUB_TOKEN environment variable must be set".to_owned())
        })?;
        Ok(Self { base_url, token })
    }
}
