//! Tracked time intervals and their normalization.
//!
//! Raw entries arrive as pairs of ISO-8601 strings. Before they can be
//! aggregated into days they go through two steps:
//!
//! 1. **Midnight split**: an interval whose end falls on a later calendar
//!    date than its start is cut into a part ending at `23:59:59.999` of the
//!    start date and a part starting at `00:00:00.000` of the end date. Only
//!    one cut is made, so an interval covering three or more dates keeps its
//!    first and last day only.
//! 2. **Rounding**: starts are rounded down and ends rounded up to a clean
//!    `:00` / `:30` boundary. The thresholds differ between the two
//!    directions:
//!
//! | minute      | start becomes     | minute      | end becomes       |
//! |-------------|-------------------|-------------|-------------------|
//! | `0..=20`    | `hh:00`           | `0..=10`    | `hh:00`           |
//! | `21..=50`   | `hh:30`           | `11..=40`   | `hh:30`           |
//! | `51..=59`   | `(hh+1):00`       | `41..=59`   | `(hh+1):00`       |
//!
//! Rounded timestamps always carry zero seconds.
//!
//! ## Usage
//!
//! ```rust
//! use tallysheet::libs::interval::{NormalizeIntervals, RawEntry};
//!
//! let entry = RawEntry::new("2024-01-01T22:10:00", "2024-01-02T01:45:00");
//! let intervals = vec![entry.parse(0)?].normalize();
//! assert_eq!(intervals.len(), 2);
//! # Ok::<(), tallysheet::libs::error::ValidationError>(())
//! ```

use crate::libs::error::{InvalidInterval, ValidationError};
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

/// Naive timestamp layouts accepted besides RFC 3339.
const NAIVE_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// A raw `{start, end}` pair as delivered by a time tracker or a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A contiguous tracked work period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Parses an ISO-8601 timestamp into its wall-clock time.
///
/// Timestamps with an offset keep the local time of that offset, so
/// `2024-01-01T09:13:00+01:00` becomes `2024-01-01 09:13:00`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_local());
    }
    NAIVE_FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

impl RawEntry {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    /// Converts the entry into a [`TimeInterval`].
    ///
    /// `index` is the entry's position in the input list and is reported
    /// back in the [`ValidationError`] when a timestamp is missing,
    /// malformed, or the end precedes the start.
    pub fn parse(&self, index: usize) -> Result<TimeInterval, ValidationError> {
        let fail = |reason| ValidationError {
            index,
            start: self.start.clone(),
            end: self.end.clone(),
            reason,
        };

        let start = self.start.as_deref().ok_or_else(|| fail(InvalidInterval::MissingStart))?;
        let end = self.end.as_deref().ok_or_else(|| fail(InvalidInterval::MissingEnd))?;
        let start = parse_timestamp(start).ok_or_else(|| fail(InvalidInterval::Malformed(start.to_string())))?;
        let end = parse_timestamp(end).ok_or_else(|| fail(InvalidInterval::Malformed(end.to_string())))?;

        if end < start {
            return Err(fail(InvalidInterval::EndBeforeStart));
        }
        Ok(TimeInterval { start, end })
    }
}

impl TimeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Whole minutes between start and end, truncated.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Cuts the interval at the first midnight it crosses.
    pub fn split_at_midnight(self) -> Vec<TimeInterval> {
        if self.start.date() == self.end.date() {
            return vec![self];
        }

        let start_of_end_day = self.end.date().and_time(NaiveTime::MIN);
        let end_of_start_day = self.start.date().and_time(NaiveTime::MIN) + TimeDelta::days(1) - TimeDelta::milliseconds(1);

        vec![
            TimeInterval::new(self.start, end_of_start_day),
            TimeInterval::new(start_of_end_day, self.end),
        ]
    }

    /// Rounds the start down and the end up.
    pub fn rounded(&self) -> TimeInterval {
        TimeInterval::new(round_down(self.start), round_up(self.end))
    }
}

fn start_of_hour(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.date().and_time(NaiveTime::MIN) + TimeDelta::hours(i64::from(timestamp.hour()))
}

/// Rounds an interval start: `> 50` goes to the next hour, `21..=50` to `:30`, otherwise `:00`.
pub fn round_down(timestamp: NaiveDateTime) -> NaiveDateTime {
    let hour = start_of_hour(timestamp);
    match timestamp.minute() {
        m if m > 50 => hour + TimeDelta::hours(1),
        m if m > 20 => hour + TimeDelta::minutes(30),
        _ => hour,
    }
}

/// Rounds an interval end: `> 40` goes to the next hour, `11..=40` to `:30`, otherwise `:00`.
pub fn round_up(timestamp: NaiveDateTime) -> NaiveDateTime {
    let hour = start_of_hour(timestamp);
    match timestamp.minute() {
        m if m > 40 => hour + TimeDelta::hours(1),
        m if m > 10 => hour + TimeDelta::minutes(30),
        _ => hour,
    }
}

/// Normalization steps applied to a whole list of intervals.
pub trait NormalizeIntervals {
    /// Replaces every interval crossing midnight with its two same-day parts.
    fn split_at_midnight(self) -> Self;
    /// Rounds every interval's boundaries.
    fn rounded(self) -> Self;
    /// Splits, then rounds.
    fn normalize(self) -> Self;
}

impl NormalizeIntervals for Vec<TimeInterval> {
    fn split_at_midnight(self) -> Self {
        self.into_iter().flat_map(TimeInterval::split_at_midnight).collect()
    }

    fn rounded(self) -> Self {
        self.iter().map(TimeInterval::rounded).collect()
    }

    fn normalize(self) -> Self {
        NormalizeIntervals::split_at_midnight(self).rounded()
    }
}
