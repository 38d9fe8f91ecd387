use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Attachment;
use crate::enums::Shift;
use crate::timestamp::UtcTimestamp;

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// Entry summary exactly as the service sends it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawEntrySummary {
    pub id: String,
    pub logbook: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub title: String,
    pub logged_by: String,
    /// Date-time with no zone designator.
    pub logged_at: String,
    /// Date-time with no zone designator.
    pub event_at: String,
}

/// Full entry exactly as the service sends it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    #[serde(flatten)]
    pub summary: RawEntrySummary,
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub supersede_by: Option<String>,
    #[serde(default)]
    pub follow_up: Vec<RawEntrySummary>,
    #[serde(default)]
    pub history: Option<Vec<RawEntrySummary>>,
    #[serde(default)]
    pub following_up: Option<RawEntrySummary>,
}

/// Either wire shape. A record carrying a `text` body decodes as
/// [`RawRecord::Full`]; anything else as [`RawRecord::Summary`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawRecord {
    Full(Box<RawEntry>),
    Summary(RawEntrySummary),
}

// ---------------------------------------------------------------------------
// Normalized shapes
// ---------------------------------------------------------------------------

/// A logged entry with UTC timestamps and a derived shift label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub id: String,
    pub logbook: String,
    pub tags: Vec<String>,
    pub title: String,
    pub logged_by: String,
    /// When the entry was recorded.
    pub logged_at: UtcTimestamp,
    /// When the logged event happened.
    pub event_at: UtcTimestamp,
    pub shift: Shift,
}

/// A full entry with its text, attachments and related entries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(flatten)]
    pub summary: EntrySummary,
    pub text: String,
    pub attachments: Vec<Attachment>,
    /// Id of the entry that replaced this one, if any.
    pub supersede_by: Option<String>,
    pub follow_up: Vec<EntrySummary>,
    /// Prior versions, oldest first. Only present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<EntrySummary>>,
    /// The entry this one follows up, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following_up: Option<EntrySummary>,
}

impl Entry {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        self.supersede_by.is_some()
    }
}

/// Either normalized shape.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum Record {
    Full(Box<Entry>),
    Summary(EntrySummary),
}

impl Record {
    /// The summary part shared by both shapes.
    #[must_use]
    pub fn summary(&self) -> &EntrySummary {
        match self {
            Self::Full(entry) => &entry.summary,
            Self::Summary(summary) => summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY: &str = r#"{
        "id": "e-1",
        "logbook": "mcc",
        "tags": ["beam", "beam"],
        "title": "Beam lost",
        "loggedBy": "operator",
        "loggedAt": "2024-01-02T03:04:05.006",
        "eventAt": "2024-01-02T03:00:00"
    }"#;

    #[test]
    fn raw_summary_keeps_duplicate_tags_in_order() {
        let raw: RawEntrySummary = serde_json::from_str(SUMMARY).unwrap();
        assert_eq!(raw.tags, vec!["beam", "beam"]);
        assert_eq!(raw.logged_at, "2024-01-02T03:04:05.006");
    }

    #[test]
    fn raw_record_without_text_is_a_summary() {
        let raw: RawRecord = serde_json::from_str(SUMMARY).unwrap();
        assert!(matches!(raw, RawRecord::Summary(_)));
    }

    #[test]
    fn raw_record_with_text_is_full() {
        let json = r#"{
            "id": "e-2",
            "logbook": "mcc",
            "tags": [],
            "title": "Beam back",
            "loggedBy": "operator",
            "loggedAt": "2024-01-02T04:00:00",
            "eventAt": "2024-01-02T04:00:00",
            "text": "<p>restored</p>",
            "followUp": []
        }"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        let RawRecord::Full(entry) = raw else {
            panic!("expected a full entry");
        };
        assert_eq!(entry.summary.id, "e-2");
        assert!(entry.follow_up.is_empty());
        assert!(entry.history.is_none());
        assert!(entry.following_up.is_none());
        assert!(entry.supersede_by.is_none());
    }
}
