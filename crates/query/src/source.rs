use async_trait::async_trait;
use notehub_api::{ApiClient, ApiError};
use notehub_core::{Note, NoteDraft, NotesPage, QueryKey};

/// Backend operations the cache layer depends on.
///
/// [`ApiClient`] is the production implementation; tests supply in-memory
/// sources with controllable latency.
#[async_trait]
pub trait NotesSource: Send + Sync {
    /// Fetch one page of notes for the given key.
    async fn list(&self, key: &QueryKey) -> Result<NotesPage, ApiError>;

    /// Create a note from a validated draft.
    async fn create(&self, draft: &NoteDraft) -> Result<Note, ApiError>;

    /// Delete a note by id.
    async fn delete(&self, id: &str) -> Result<Note, ApiError>;
}

#[async_trait]
impl NotesSource for ApiClient {
    async fn list(&self, key: &QueryKey) -> Result<NotesPage, ApiError> {
        self.fetch_notes(key).await
    }

    async fn create(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        self.create_note(draft).await
    }

    async fn delete(&self, id: &str) -> Result<Note, ApiError> {
        self.delete_note(id).await
    }
}
