//! Timestamp parsing plus relative and wall-clock formatting.
//!
//! Server timestamps are ISO-8601. Values without an offset are produced by
//! the server in UTC and are interpreted that way. The current time is always
//! passed in through [`Clock`] so every formatter stays deterministic.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::format_description::well_known::Iso8601;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
/// Fixed-length month; a display hint, not calendar arithmetic.
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Viewer-side notion of "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    /// Milliseconds since the Unix epoch.
    pub now_ms: i64,
    /// Local offset in minutes east of UTC.
    pub utc_offset_minutes: i32,
}

impl Clock {
    #[must_use]
    pub fn utc(now_ms: i64) -> Self {
        Self { now_ms, utc_offset_minutes: 0 }
    }

    /// Whole seconds between `ts` and now; negative when `ts` is in the future.
    #[must_use]
    pub fn elapsed_secs(&self, ts: &str) -> Option<i64> {
        let then = timestamp_ms(ts)?;
        Some((self.now_ms - then) / 1000)
    }

    /// Relative "time since" string for `ts`, e.g. `"2m"`.
    #[must_use]
    pub fn time_since(&self, ts: &str) -> Option<String> {
        self.elapsed_secs(ts).map(format_time_since)
    }

    /// `HH:MM` of `ts` in the viewer's local offset.
    #[must_use]
    pub fn local_hh_mm(&self, ts: &str) -> Option<String> {
        let parsed = parse_timestamp(ts)?;
        let offset = match UtcOffset::from_whole_seconds(self.utc_offset_minutes * 60) {
            Ok(offset) => offset,
            Err(_) => UtcOffset::UTC,
        };
        let local = parsed.to_offset(offset);
        Some(format!("{:02}:{:02}", local.hour(), local.minute()))
    }
}

/// Parse an ISO-8601 timestamp, assuming UTC when no offset is present.
#[must_use]
pub fn parse_timestamp(ts: &str) -> Option<OffsetDateTime> {
    let ts = ts.trim();
    if let Ok(with_offset) = OffsetDateTime::parse(ts, &Iso8601::DEFAULT) {
        return Some(with_offset);
    }
    match PrimitiveDateTime::parse(ts, &Iso8601::DEFAULT) {
        Ok(naive) => Some(naive.assume_utc()),
        Err(_) => None,
    }
}

/// Milliseconds since the Unix epoch for an ISO-8601 timestamp.
#[must_use]
pub fn timestamp_ms(ts: &str) -> Option<i64> {
    let parsed = parse_timestamp(ts)?;
    match i64::try_from(parsed.unix_timestamp_nanos() / 1_000_000) {
        Ok(ms) => Some(ms),
        Err(_) => None,
    }
}

/// Largest whole unit of `elapsed_secs`, from years down to minutes.
///
/// Anything under a minute, including negative values from clock skew, is
/// `"just now"`.
#[must_use]
pub fn format_time_since(elapsed_secs: i64) -> String {
    let units = [(YEAR, "y"), (MONTH, "mo"), (DAY, "d"), (HOUR, "h"), (MINUTE, "m")];
    for (size, suffix) in units {
        let count = elapsed_secs / size;
        if count >= 1 {
            return format!("{count}{suffix}");
        }
    }
    "just now".to_owned()
}
