//! Shift labelling.
//!
//! The service predates shift tracking; entries logged before a one-off
//! cutover instant are labelled "Morning shift" and everything from that
//! instant on is "Day shift". This is a historical split, not a daily
//! schedule.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Shift;

/// Instant separating the two shift labels. Entries logged strictly before
/// it are [`Shift::Morning`]; at or after it, [`Shift::Day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ShiftCutoff(DateTime<Utc>);

impl ShiftCutoff {
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Shift label for an entry logged at `logged_at`.
    #[must_use]
    pub fn shift_for(&self, logged_at: &DateTime<Utc>) -> Shift {
        if *logged_at < self.0 {
            Shift::Morning
        } else {
            Shift::Day
        }
    }
}

impl Default for ShiftCutoff {
    /// `2023-07-20T21:55:38.205Z`
    fn default() -> Self {
        let instant = NaiveDate::from_ymd_opt(2023, 7, 20)
            .and_then(|date| date.and_hms_milli_opt(21, 55, 38, 205))
            .map_or(DateTime::<Utc>::UNIX_EPOCH, |naive| naive.and_utc());
        Self(instant)
    }
}

impl From<DateTime<Utc>> for ShiftCutoff {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}
