//! Timestamp parsing for catalog records and date filters
//!
//! Catalog feeds are not consistent about offsets, so three forms are read:
//! - RFC 3339 (`2025-04-03T13:51:46+01:00`)
//! - naive date-time, read as UTC (`2025-04-03T13:51:46.897146`)
//! - date only, read as midnight UTC (`2025-04-03`)

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a timestamp in any of the accepted forms.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let value = value.trim();

    let rfc3339_error = match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => return Ok(dt),
        Err(e) => e,
    };

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().fixed_offset());
        }
    }

    Err(rfc3339_error)
}

/// Serde adapter for a required timestamp field.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(|e| {
        serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e))
    })
}

/// Serde adapter for an optional timestamp field.
pub fn deserialize_optional<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw).map(Some).map_err(|e| {
            serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e))
        }),
        None => Ok(None),
    }
}
