//! Time and timestamp utilities

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// Current time truncated to millisecond precision
///
/// Stored timestamps carry milliseconds only so that a persisted record
/// reloads to an identical value.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    Utc.timestamp_millis_opt(now.timestamp_millis())
        .single()
        .unwrap_or(now)
}

/// ISO-8601 rendering used on the wire, e.g. `2024-06-10T06:13:20.000Z`
pub fn to_iso8601(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time as an ISO-8601 string
pub fn current_iso8601() -> String {
    to_iso8601(&Utc::now())
}
