//! Entry listing, fetching and writing.

use elog_core::entities::{Entry, EntryForm, EntrySummary, RawEntry, RawEntrySummary};
use elog_core::query::{EntryQuery, entry_detail_params};
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{Request, Transport};
use crate::ElogClient;

impl<T: Transport> ElogClient<T> {
    /// List entry summaries matching `query`, in the order the service
    /// returns them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the transport fails, the body is not a list
    /// of entries, or a timestamp cannot be normalized.
    pub async fn fetch_entries(&self, query: &EntryQuery) -> Result<Vec<EntrySummary>, ClientError> {
        let data = self
            .transport
            .fetch("entries", Request::get(query.to_params()))
            .await?;
        let raws: Vec<RawEntrySummary> = serde_json::from_value(data)?;
        tracing::debug!(count = raws.len(), "fetched entries");
        Ok(self.normalizer.summaries(raws)?)
    }

    /// Fetch one entry with its follow-ups, history and the entry it follows
    /// up.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_entries`].
    pub async fn fetch_entry(&self, id: &str) -> Result<Entry, ClientError> {
        let data = self
            .transport
            .fetch(&entry_path(id), Request::get(entry_detail_params()))
            .await?;
        let raw: RawEntry = serde_json::from_value(data)?;
        Ok(self.normalizer.entry(raw)?)
    }

    /// Create a top-level entry and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `event_at` cannot be canonicalized, the
    /// transport fails, or the response is not an id.
    pub async fn create_entry(&self, form: EntryForm) -> Result<String, ClientError> {
        self.post_form("entries".to_string(), form).await
    }

    /// Create an entry following up `parent_id` and return its id.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_entry`].
    pub async fn follow_up(&self, parent_id: &str, form: EntryForm) -> Result<String, ClientError> {
        self.post_form(format!("{}/follow-ups", entry_path(parent_id)), form)
            .await
    }

    /// Create a new version of `target_id` and return its id.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_entry`].
    pub async fn supersede(&self, target_id: &str, form: EntryForm) -> Result<String, ClientError> {
        self.post_form(format!("{}/supersede", entry_path(target_id)), form)
            .await
    }

    async fn post_form(&self, path: String, form: EntryForm) -> Result<String, ClientError> {
        let body = serde_json::to_value(form.into_outbound()?)?;
        let data = self.transport.fetch(&path, Request::post(body)).await?;
        let id = new_id(data)?;
        tracing::debug!(%path, %id, "entry written");
        Ok(id)
    }
}

fn entry_path(id: &str) -> String {
    format!("entries/{}", urlencoding::encode(id))
}

fn new_id(data: Value) -> Result<String, ClientError> {
    Ok(serde_json::from_value(data)?)
}
