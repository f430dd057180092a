//! Timestamp conventions.
//!
//! Traces are generated in naive local time: the configuration carries no
//! time zone, and weekday eligibility is decided on the wall-clock date.
//! Output is truncated to whole seconds.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::{CoreError, CoreResult};

/// Interval between pings while the traveler dwells at a route's start or end.
pub const PING_INTERVAL_SECS: u32 = 10 * 60;

/// `YYYY-MM-DD HH:MM:SS`, used for both CLI input and CSV output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Weekday index of `at`, Monday = 0 … Sunday = 6.
#[inline]
pub fn weekday_index(at: NaiveDateTime) -> u8 {
    at.weekday().num_days_from_monday() as u8
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn parse_timestamp(s: &str) -> CoreResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map_err(|e| {
        CoreError::InvalidFieldFormat(format!(
            "invalid timestamp {s:?} ({e}); expected YYYY-MM-DD HH:MM:SS"
        ))
    })
}

/// Drop sub-second precision.
#[inline]
pub fn truncate_to_secs(at: NaiveDateTime) -> NaiveDateTime {
    at.with_nanosecond(0).unwrap_or(at)
}

/// Render `at` as `YYYY-MM-DD HH:MM:SS`, truncated to whole seconds.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    truncate_to_secs(at).format(TIMESTAMP_FORMAT).to_string()
}
