//! Shift labels and sort keys.
//!
//! Both enums serialize to the exact strings the logbook service and the
//! original UI use, so they can be placed directly into entry JSON and query
//! parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Shift
// ---------------------------------------------------------------------------

/// Derived shift label. There are exactly two, split at a single historical
/// cutoff instant (see [`crate::shift::ShiftCutoff`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Shift {
    #[serde(rename = "Morning shift")]
    Morning,
    #[serde(rename = "Day shift")]
    Day,
}

impl Shift {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning shift",
            Self::Day => "Day shift",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortBy
// ---------------------------------------------------------------------------

/// Which timestamp the service orders entry listings by.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    EventAt,
    LoggedAt,
}

impl SortBy {
    /// Value sent as the `sortBy` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EventAt => "eventAt",
            Self::LoggedAt => "loggedAt",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_serializes_to_label() {
        assert_eq!(
            serde_json::to_string(&Shift::Morning).unwrap(),
            "\"Morning shift\""
        );
        assert_eq!(serde_json::to_string(&Shift::Day).unwrap(), "\"Day shift\"");
        let parsed: Shift = serde_json::from_str("\"Day shift\"").unwrap();
        assert_eq!(parsed, Shift::Day);
    }

    #[test]
    fn sort_by_defaults_to_event_at() {
        assert_eq!(SortBy::default(), SortBy::EventAt);
        assert_eq!(SortBy::default().as_str(), "eventAt");
        assert_eq!(SortBy::LoggedAt.to_string(), "loggedAt");
    }

    #[test]
    fn sort_by_serde_matches_query_value() {
        for sort in [SortBy::EventAt, SortBy::LoggedAt] {
            let json = serde_json::to_string(&sort).unwrap();
            assert_eq!(json, format!("\"{}\"", sort.as_str()));
        }
    }
}
