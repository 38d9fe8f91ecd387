//! Entry normalization.
//!
//! Turns wire records into normalized ones: both timestamps get the UTC
//! designator appended and are parsed, the shift label is derived from
//! `loggedAt`, and for full entries the same rule is applied to every
//! follow-up, every history version and the followed-up entry.

use crate::entities::{Entry, EntrySummary, RawEntry, RawEntrySummary, RawRecord, Record};
use crate::errors::CoreError;
use crate::shift::ShiftCutoff;
use crate::timestamp::UtcTimestamp;

/// Applies the normalization rule with a fixed shift cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    cutoff: ShiftCutoff,
}

impl Normalizer {
    #[must_use]
    pub const fn new(cutoff: ShiftCutoff) -> Self {
        Self { cutoff }
    }

    #[must_use]
    pub const fn cutoff(&self) -> ShiftCutoff {
        self.cutoff
    }

    /// Normalize a bare summary.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Timestamp`] if either timestamp is malformed.
    pub fn summary(&self, raw: RawEntrySummary) -> Result<EntrySummary, CoreError> {
        let logged_at = UtcTimestamp::from_server(&raw.logged_at)?;
        let event_at = UtcTimestamp::from_server(&raw.event_at)?;
        Ok(EntrySummary {
            id: raw.id,
            logbook: raw.logbook,
            tags: raw.tags,
            title: raw.title,
            logged_by: raw.logged_by,
            shift: self.cutoff.shift_for(&logged_at.instant()),
            logged_at,
            event_at,
        })
    }

    /// Normalize a sequence of summaries, preserving order.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed timestamp.
    pub fn summaries(&self, raws: Vec<RawEntrySummary>) -> Result<Vec<EntrySummary>, CoreError> {
        raws.into_iter().map(|raw| self.summary(raw)).collect()
    }

    /// Normalize a full entry together with its related entries.
    ///
    /// Absent `history` and `following_up` stay absent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Timestamp`] if any timestamp in the entry or its
    /// related entries is malformed.
    pub fn entry(&self, raw: RawEntry) -> Result<Entry, CoreError> {
        Ok(Entry {
            summary: self.summary(raw.summary)?,
            text: raw.text,
            attachments: raw.attachments,
            supersede_by: raw.supersede_by,
            follow_up: self.summaries(raw.follow_up)?,
            history: raw.history.map(|h| self.summaries(h)).transpose()?,
            following_up: raw.following_up.map(|f| self.summary(f)).transpose()?,
        })
    }

    /// Normalize either shape.
    ///
    /// # Errors
    ///
    /// See [`Self::summary`] and [`Self::entry`].
    pub fn record(&self, raw: RawRecord) -> Result<Record, CoreError> {
        match raw {
            RawRecord::Full(entry) => Ok(Record::Full(Box::new(self.entry(*entry)?))),
            RawRecord::Summary(summary) => Ok(Record::Summary(self.summary(summary)?)),
        }
    }
}
