//! Query parameters for entry retrieval.

use std::collections::BTreeMap;

use crate::enums::SortBy;
use crate::timestamp::UtcTimestamp;

/// Query parameters as sent to the transport.
pub type QueryParams = BTreeMap<String, String>;

/// Filters for listing entries. Every field is optional; `Default` lists
/// everything sorted by event time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    pub start_date: Option<UtcTimestamp>,
    pub end_date: Option<UtcTimestamp>,
    pub limit: Option<u32>,
    /// Number of surrounding entries to include around the result set.
    pub context_size: Option<u32>,
    pub search: Option<String>,
    pub sort_by: SortBy,
    pub logbooks: Vec<String>,
    pub tags: Vec<String>,
}

impl EntryQuery {
    /// Build the transport query parameters.
    ///
    /// `logbooks` and `tags` are always present, even when empty. Dates go
    /// out as their UTC-qualified text cut at the designator, at whatever
    /// precision they carry. Zero limits and empty searches are omitted.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert("logbooks".into(), self.logbooks.join(","));
        params.insert("tags".into(), self.tags.join(","));

        if let Some(start) = &self.start_date {
            params.insert("startDate".into(), start.server_text().to_string());
        }
        if let Some(end) = &self.end_date {
            params.insert("endDate".into(), end.server_text().to_string());
        }
        if let Some(limit) = self.limit.filter(|&n| n > 0) {
            params.insert("limit".into(), limit.to_string());
        }
        if let Some(context_size) = self.context_size.filter(|&n| n > 0) {
            params.insert("contextSize".into(), context_size.to_string());
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.insert("textFilter".into(), search.to_string());
        }
        params.insert("sortBy".into(), self.sort_by.as_str().to_string());

        params
    }
}

/// Parameters for fetching a single entry with all its related entries.
#[must_use]
pub fn entry_detail_params() -> QueryParams {
    ["includeFollowUps", "includeHistory", "includeFollowingUps"]
        .into_iter()
        .map(|key| (key.to_string(), "true".to_string()))
        .collect()
}
