//! Timestamp helpers shared by normalization, querying and writes.
//!
//! The logbook service emits and expects local-looking date-times with no
//! zone designator, while meaning UTC. Inbound values get the designator
//! appended before parsing; outbound filter values get it stripped back off.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::errors::CoreError;

/// The UTC designator the service omits.
pub const UTC_DESIGNATOR: char = 'Z';

/// Append the UTC designator to a raw server timestamp.
#[must_use]
pub fn qualify_utc(raw: &str) -> String {
    format!("{raw}{UTC_DESIGNATOR}")
}

/// Parse a raw server timestamp (no designator) as a UTC instant.
///
/// # Errors
///
/// Returns [`CoreError::Timestamp`] when the qualified value is not a valid
/// RFC 3339 style instant.
pub fn parse_server_timestamp(raw: &str) -> Result<DateTime<Utc>, CoreError> {
    let qualified = qualify_utc(raw);
    qualified
        .parse::<DateTime<Utc>>()
        .map_err(|e| CoreError::timestamp(raw, e))
}

/// Render an instant in canonical form: `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn to_canonical(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Portion of `value` preceding the first UTC designator.
#[must_use]
pub fn strip_utc_designator(value: &str) -> &str {
    value
        .split_once(UTC_DESIGNATOR)
        .map_or(value, |(head, _)| head)
}

/// A UTC instant together with the UTC-qualified text it was read from.
///
/// The text keeps the precision the service used, so a normalized timestamp
/// sent back as a filter date matches the entry it came from. Serializes as
/// the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcTimestamp {
    text: String,
    instant: DateTime<Utc>,
}

impl UtcTimestamp {
    /// Read a raw server timestamp (no designator) as UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Timestamp`] if the qualified value does not parse.
    pub fn from_server(raw: &str) -> Result<Self, CoreError> {
        let instant = parse_server_timestamp(raw)?;
        Ok(Self {
            text: qualify_utc(raw),
            instant,
        })
    }

    /// Parse an already UTC-qualified timestamp such as
    /// `2024-01-01T00:00:00.000Z`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Timestamp`] if the value does not end in the UTC
    /// designator or is not a valid instant.
    pub fn parse(qualified: &str) -> Result<Self, CoreError> {
        if !qualified.ends_with(UTC_DESIGNATOR) {
            return Err(CoreError::timestamp(qualified, "missing UTC designator"));
        }
        let instant = qualified
            .parse::<DateTime<Utc>>()
            .map_err(|e| CoreError::timestamp(qualified, e))?;
        Ok(Self {
            text: qualified.to_string(),
            instant,
        })
    }

    /// The UTC-qualified text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The form the service expects for filter dates: the text preceding
    /// the designator.
    #[must_use]
    pub fn server_text(&self) -> &str {
        strip_utc_designator(&self.text)
    }
}

impl From<DateTime<Utc>> for UtcTimestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self {
            text: to_canonical(&instant),
            instant,
        }
    }
}

impl TryFrom<String> for UtcTimestamp {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UtcTimestamp> for String {
    fn from(value: UtcTimestamp) -> Self {
        value.text
    }
}

impl fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl JsonSchema for UtcTimestamp {
    fn schema_name() -> Cow<'static, str> {
        "UtcTimestamp".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        DateTime::<Utc>::json_schema(generator)
    }
}

/// Parse a user-supplied instant.
///
/// Accepts an RFC 3339 instant with any offset, a bare date-time
/// (`YYYY-MM-DDTHH:MM[:SS[.fff]]`, read as UTC, not local time) or a bare
/// date (UTC midnight).
///
/// # Errors
///
/// Returns [`CoreError::Timestamp`] if none of the accepted forms match.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, CoreError> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = value.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::timestamp(value, "expected an RFC 3339 instant, date-time or date"))
}

/// Convert a user-supplied instant to canonical form.
///
/// # Errors
///
/// Same as [`parse_instant`].
pub fn canonicalize(value: &str) -> Result<String, CoreError> {
    parse_instant(value).map(|instant| to_canonical(&instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn server_timestamp_is_read_as_utc() {
        let parsed = parse_server_timestamp("2023-07-20T21:55:38.205").unwrap();
        assert_eq!(to_canonical(&parsed), "2023-07-20T21:55:38.205Z");
    }

    #[test]
    fn server_timestamp_without_fraction() {
        let parsed = parse_server_timestamp("2024-02-01T08:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn malformed_server_timestamp_fails() {
        let err = parse_server_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, CoreError::Timestamp { ref value, .. } if value == "yesterday"));
    }

    #[test]
    fn strips_everything_after_first_designator() {
        assert_eq!(
            strip_utc_designator("2024-01-01T00:00:00.000Z"),
            "2024-01-01T00:00:00.000"
        );
        assert_eq!(strip_utc_designator("2024-01-01T00:00:00"), "2024-01-01T00:00:00");
        assert_eq!(strip_utc_designator("aZbZ"), "a");
    }

    #[test]
    fn server_timestamp_keeps_its_own_precision() {
        let micros = UtcTimestamp::from_server("2024-01-01T10:00:00.123456").unwrap();
        assert_eq!(micros.as_str(), "2024-01-01T10:00:00.123456Z");
        assert_eq!(micros.server_text(), "2024-01-01T10:00:00.123456");

        let whole = UtcTimestamp::from_server("2024-02-01T08:00:00").unwrap();
        assert_eq!(whole.server_text(), "2024-02-01T08:00:00");
        assert_eq!(whole.instant(), Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn instants_render_with_millis() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let timestamp = UtcTimestamp::from(instant);
        assert_eq!(timestamp.as_str(), "2024-01-01T00:00:00.000Z");
        assert_eq!(timestamp.server_text(), "2024-01-01T00:00:00.000");
    }

    #[test]
    fn qualified_parse_requires_the_designator() {
        assert!(UtcTimestamp::parse("2024-01-01T00:00:00.000Z").is_ok());
        assert!(UtcTimestamp::parse("2024-01-01T00:00:00.000").is_err());
        assert!(UtcTimestamp::parse("2024-01-01T00:00:00+02:00").is_err());
        assert!(UtcTimestamp::parse("noonZ").is_err());
    }

    #[test]
    fn timestamp_serializes_as_its_text() {
        let timestamp = UtcTimestamp::from_server("2024-01-01T10:00:00.5").unwrap();
        let json = serde_json::to_value(&timestamp).unwrap();
        assert_eq!(json, "2024-01-01T10:00:00.5Z");
        let back: UtcTimestamp = serde_json::from_value(json).unwrap();
        assert_eq!(back, timestamp);
        assert!(serde_json::from_str::<UtcTimestamp>("\"2024-01-01\"").is_err());
    }

    #[test]
    fn canonicalizes_bare_date_to_utc_midnight() {
        assert_eq!(canonicalize("2024-03-01").unwrap(), "2024-03-01T00:00:00.000Z");
    }

    #[test]
    fn canonicalizes_offsets_to_utc() {
        assert_eq!(
            canonicalize("2024-03-01T10:30:00+02:00").unwrap(),
            "2024-03-01T08:30:00.000Z"
        );
        assert_eq!(
            canonicalize("2024-03-01T10:30").unwrap(),
            "2024-03-01T10:30:00.000Z"
        );
        assert_eq!(
            canonicalize("2024-03-01T10:30:15.5").unwrap(),
            "2024-03-01T10:30:15.500Z"
        );
    }

    #[test]
    fn canonicalize_rejects_garbage() {
        assert!(canonicalize("not a date").is_err());
    }
}
