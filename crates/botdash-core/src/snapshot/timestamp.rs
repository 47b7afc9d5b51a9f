//! Deployment timestamp parsing and local display.
//!
//! Accepted forms:
//! - RFC 3339 with an offset (`2024-03-05T14:07:09Z`, `...+02:00`)
//! - naive ISO-8601 (`2024-03-05T14:07:09[.ffffff]`, also with a space
//!   separator), interpreted as local time
//! - a JSON number of epoch milliseconds

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Shown for a missing or unparsable timestamp.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Parse a raw timestamp value into local time.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Local>> {
    match value {
        Value::String(s) => parse_timestamp_str(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|utc| utc.with_timezone(&Local)),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let naive = s
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;

    Local.from_local_datetime(&naive).earliest()
}

/// Render a date-time in the dashboard's display format.
pub fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(DISPLAY_FORMAT).to_string()
}

/// Display text for an optional raw timestamp.
pub fn display_timestamp(value: Option<&Value>) -> String {
    value
        .and_then(parse_timestamp)
        .map(|dt| format_datetime(&dt))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
