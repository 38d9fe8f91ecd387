use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::timestamp::canonicalize;

/// Directive turning a new entry into the summary of a shift.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Summarize {
    pub shift: String,
    pub date: String,
}

/// Body sent when creating, following up or superseding an entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryForm {
    pub title: String,
    pub text: String,
    pub logbook: String,
    pub tags: Vec<String>,
    /// Ids of previously uploaded attachments.
    pub attachments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarize: Option<Summarize>,
}

impl EntryForm {
    /// The form as it goes over the wire: an `event_at` override is converted
    /// to a canonical UTC instant, every other field is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Timestamp`] if `event_at` cannot be parsed.
    pub fn into_outbound(self) -> Result<Self, CoreError> {
        let Some(event_at) = self.event_at.as_deref() else {
            return Ok(self);
        };
        let event_at = canonicalize(event_at)?;
        Ok(Self {
            event_at: Some(event_at),
            ..self
        })
    }
}
