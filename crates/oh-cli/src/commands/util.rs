//! Shared utilities for CLI commands.

use chrono::{DateTime, Duration, Local, Utc};

/// Parses an RFC 3339 instant, e.g. "2026-01-15T10:30:00Z".
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid instant '{s}': {e}"))
}

/// Formats a duration as "HH:MM", truncating seconds.
///
/// Negative durations get a leading '-'.
pub fn format_hm(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats the local wall-clock time of an instant as "HH:MM".
pub fn format_clock(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%H:%M").to_string()
}

/// IANA name of the local timezone, falling back to UTC.
pub fn local_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}
