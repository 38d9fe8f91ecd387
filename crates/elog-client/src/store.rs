//! Client-side entry cache.
//!
//! Entries are cached by id after the first fetch. Writes that change an
//! entry's relations (follow-up, supersede) drop the affected entry so the
//! next read refetches it. Failed fetches are never cached.

use elog_core::entities::{Entry, EntryForm};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::ClientError;
use crate::transport::Transport;
use crate::ElogClient;

pub struct EntryStore<T> {
    client: ElogClient<T>,
    entries: RwLock<HashMap<String, Entry>>,
}

impl<T: Transport> EntryStore<T> {
    #[must_use]
    pub fn new(client: ElogClient<T>) -> Self {
        Self {
            client,
            entries: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn client(&self) -> &ElogClient<T> {
        &self.client
    }

    /// Cached entry for `id`, fetching and caching it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates [`ElogClient::fetch_entry`] failures.
    pub async fn get_or_fetch(&self, id: &str) -> Result<Entry, ClientError> {
        if let Some(entry) = self.entries.read().await.get(id) {
            tracing::debug!(id, "entry cache hit");
            return Ok(entry.clone());
        }

        tracing::debug!(id, "entry cache miss");
        let entry = self.client.fetch_entry(id).await?;
        self.entries
            .write()
            .await
            .insert(id.to_string(), entry.clone());
        Ok(entry)
    }

    /// Cache an entry obtained elsewhere.
    pub async fn insert(&self, entry: Entry) {
        self.entries
            .write()
            .await
            .insert(entry.id().to_string(), entry);
    }

    /// Drop `id` from the cache. Returns whether it was cached.
    pub async fn invalidate(&self, id: &str) -> bool {
        self.entries.write().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Follow up `parent_id` and drop the parent from the cache.
    ///
    /// # Errors
    ///
    /// Propagates [`ElogClient::follow_up`] failures; the cache is left
    /// untouched on failure.
    pub async fn follow_up(&self, parent_id: &str, form: EntryForm) -> Result<String, ClientError> {
        let id = self.client.follow_up(parent_id, form).await?;
        self.invalidate(parent_id).await;
        Ok(id)
    }

    /// Supersede `target_id` and drop it from the cache.
    ///
    /// # Errors
    ///
    /// Propagates [`ElogClient::supersede`] failures; the cache is left
    /// untouched on failure.
    pub async fn supersede(&self, target_id: &str, form: EntryForm) -> Result<String, ClientError> {
        let id = self.client.supersede(target_id, form).await?;
        self.invalidate(target_id).await;
        Ok(id)
    }
}
