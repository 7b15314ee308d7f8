//! Keyed listing cache with single-flight fetches and epoch invalidation.
//!
//! One cache entry per [`QueryKey`]. At most one request is in flight per
//! key: concurrent callers serialize on a per-key lock and the late ones
//! re-read the entry the first one filled. Invalidation bumps a global
//! epoch; entries written under an older epoch remain readable through
//! [`QueryClient::peek`] as placeholder data but no longer count as fresh,
//! so a response that raced an invalidation can never overwrite newer
//! state.
//!
//! The map is bounded: past [`MAX_ENTRIES`] keys, the least recently used
//! idle entry is dropped, so a long session cycling through search terms
//! does not grow the cache without limit.

use std::collections::HashMap;
use std::sync::Arc;

use notehub_core::{Note, NoteDraft, NotesPage, QueryKey};
use tokio::sync::Mutex;

use crate::{NotesSource, QueryError};

/// Request cache over a [`NotesSource`], plus the mutations that
/// invalidate it.
pub struct QueryClient<S: NotesSource> {
    source: Arc<S>,
    state: Mutex<CacheState>,
}

/// Upper bound on cached keys before least-recently-used eviction.
const MAX_ENTRIES: usize = 32;

struct CacheState {
    epoch: u64,
    tick: u64,
    entries: HashMap<QueryKey, CacheEntry>,
}

impl CacheState {
    /// Looks up (or creates) the entry for `key` and stamps its use time.
    fn touch(&mut self, key: &QueryKey) -> &mut CacheEntry {
        self.tick += 1;
        let tick = self.tick;
        let entry = self.entries.entry(key.clone()).or_default();
        entry.last_used = tick;
        entry
    }

    /// Drops least-recently-used entries past the cap. Entries with a
    /// request in flight are never evicted, nor is `keep`.
    fn evict_over_capacity(&mut self, keep: &QueryKey) {
        while self.entries.len() > MAX_ENTRIES {
            let victim = self
                .entries
                .iter()
                .filter(|(k, e)| *k != keep && !e.fetching)
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone());
            match victim {
                Some(key) => {
                    tracing::debug!(page = key.page, search = %key.search, "cache entry evicted");
                    self.entries.remove(&key);
                },
                None => break,
            }
        }
    }
}

#[derive(Default)]
struct CacheEntry {
    data: Option<Arc<NotesPage>>,
    error: Option<String>,
    fetched_epoch: u64,
    fetching: bool,
    last_used: u64,
    fetch_lock: Arc<Mutex<()>>,
}

impl CacheEntry {
    fn is_fresh(&self, epoch: u64) -> bool {
        self.data.is_some() && self.fetched_epoch == epoch
    }
}

/// Observable request state for one key, mirroring the initial-load vs
/// background-refetch distinction the view renders.
#[derive(Debug, Clone, Default)]
pub struct QueryStatus {
    pub has_data: bool,
    pub is_fresh: bool,
    pub is_fetching: bool,
    pub error: Option<String>,
}

impl QueryStatus {
    /// First load: a request is running and nothing is cached yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_fetching && !self.has_data
    }
}

impl<S: NotesSource> QueryClient<S> {
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: Mutex::new(CacheState { epoch: 0, tick: 0, entries: HashMap::new() }),
        }
    }

    /// Returns the listing for `key`, fetching it when the cache has no
    /// fresh entry.
    ///
    /// # Errors
    /// Returns the source's error; the previous cached data (if any) is
    /// kept so the view can continue showing it.
    pub async fn fetch(&self, key: &QueryKey) -> Result<Arc<NotesPage>, QueryError> {
        let lock = {
            let mut state = self.state.lock().await;
            let epoch = state.epoch;
            let entry = state.touch(key);
            if entry.is_fresh(epoch) {
                if let Some(data) = &entry.data {
                    tracing::debug!(page = key.page, search = %key.search, "cache hit");
                    return Ok(Arc::clone(data));
                }
            }
            let lock = Arc::clone(&entry.fetch_lock);
            state.evict_over_capacity(key);
            lock
        };

        let _guard = lock.lock().await;

        // Re-check: while we waited on the lock another caller may have
        // filled the entry, in which case no second request is issued.
        let started_epoch = {
            let mut state = self.state.lock().await;
            let epoch = state.epoch;
            let entry = state.touch(key);
            if entry.is_fresh(epoch) {
                if let Some(data) = &entry.data {
                    return Ok(Arc::clone(data));
                }
            }
            entry.fetching = true;
            epoch
        };

        tracing::debug!(page = key.page, search = %key.search, "fetching from source");
        let result = self.source.list(key).await;

        let mut state = self.state.lock().await;
        let current_epoch = state.epoch;
        let entry = state.touch(key);
        entry.fetching = false;
        match result {
            Ok(page) => {
                let page = Arc::new(page);
                entry.data = Some(Arc::clone(&page));
                entry.error = None;
                // A response raced by an invalidation keeps its start
                // epoch, which demotes it to placeholder data.
                entry.fetched_epoch = started_epoch;
                if started_epoch != current_epoch {
                    tracing::debug!(page = key.page, "response arrived after invalidation, kept as stale");
                }
                Ok(page)
            },
            Err(e) => {
                entry.error = Some(e.to_string());
                Err(e.into())
            },
        }
    }

    /// Last cached listing for `key`, fresh or stale. This is the
    /// keep-previous-data placeholder the view shows while a refetch runs.
    pub async fn peek(&self, key: &QueryKey) -> Option<Arc<NotesPage>> {
        let state = self.state.lock().await;
        state.entries.get(key).and_then(|entry| entry.data.clone())
    }

    /// Current request state for `key`.
    pub async fn snapshot(&self, key: &QueryKey) -> QueryStatus {
        let state = self.state.lock().await;
        state.entries.get(key).map_or_else(QueryStatus::default, |entry| QueryStatus {
            has_data: entry.data.is_some(),
            is_fresh: entry.is_fresh(state.epoch),
            is_fetching: entry.fetching,
            error: entry.error.clone(),
        })
    }

    /// Marks every cached listing stale. Data stays readable through
    /// [`Self::peek`] until the next fetch for its key completes.
    pub async fn invalidate_all(&self) {
        let mut state = self.state.lock().await;
        state.epoch += 1;
        tracing::debug!(epoch = state.epoch, "listing cache invalidated");
    }

    /// Validates and creates a note, then invalidates the listing cache.
    ///
    /// # Errors
    /// Returns [`QueryError::Validation`] without touching the network when
    /// the draft is rejected client-side, or the source's error otherwise;
    /// the cache is untouched on failure.
    pub async fn create(&self, draft: &NoteDraft) -> Result<Note, QueryError> {
        draft.validate().map_err(QueryError::Validation)?;
        let note = self.source.create(draft).await?;
        self.invalidate_all().await;
        Ok(note)
    }

    /// Deletes a note and invalidates the listing cache. No optimistic
    /// removal: the row disappears when the refetch lands.
    ///
    /// # Errors
    /// Returns the source's error; the cache is untouched on failure.
    pub async fn delete(&self, id: &str) -> Result<Note, QueryError> {
        let note = self.source.delete(id).await?;
        self.invalidate_all().await;
        Ok(note)
    }
}
