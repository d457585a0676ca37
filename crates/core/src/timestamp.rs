//! Lenient timestamp parsing for client-supplied dates.
//!
//! Accepts RFC 3339 timestamps, naive date-times (assumed UTC) and plain
//! `YYYY-MM-DD` dates (midnight UTC). HTML date inputs send the last form.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Naive date-time layouts tried after RFC 3339.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a client-supplied timestamp.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(CoreError::Validation(format!("Invalid timestamp '{raw}'")))
}

/// Deserialize an optional timestamp field (`null` or missing is `None`).
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

/// Deserialize a patch timestamp field; pair with `#[serde(default)]`.
///
/// See [`crate::patch`] for the meaning of the two `Option` layers.
pub fn deserialize_patch<'de, D>(deserializer: D) -> Result<Option<Option<Timestamp>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_timestamp("2024-03-10T12:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.day(), 10);
    }

    #[test]
    fn parses_naive_datetime_as_utc() {
        let ts = parse_timestamp("2024-03-10T12:30:00").unwrap();
        assert_eq!(ts.hour(), 12);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn parses_plain_date_as_midnight() {
        let ts = parse_timestamp("2023-11-05").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 11, 5));
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert_matches!(parse_timestamp("last tuesday"), Err(CoreError::Validation(_)));
    }

    #[derive(Debug, Deserialize)]
    struct Dated {
        #[serde(default, deserialize_with = "deserialize_optional")]
        purchase_date: Option<Timestamp>,
        #[serde(default, deserialize_with = "deserialize_patch")]
        patched: Option<Option<Timestamp>>,
    }

    #[test]
    fn serde_helpers_distinguish_null_and_missing() {
        let dated: Dated = serde_json::from_str(r#"{"purchase_date": "2024-01-02"}"#).unwrap();
        assert!(dated.purchase_date.is_some());
        assert_eq!(dated.patched, None);

        let dated: Dated = serde_json::from_str(r#"{"patched": null}"#).unwrap();
        assert_eq!(dated.purchase_date, None);
        assert_eq!(dated.patched, Some(None));
    }

    #[test]
    fn serde_helper_reports_bad_dates() {
        assert!(serde_json::from_str::<Dated>(r#"{"purchase_date": "soon"}"#).is_err());
    }
}
