//! Display formatting for report values.
//!
//! Every duration and clock time in a report is shown as `HH:MM`. Durations
//! are rendered from whole minutes with hours zero-padded to two digits,
//! clock times come straight from the rounded timestamp.
//!
//! Two rules are specific to attendance reports:
//!
//! - An end time that reads `00:00` is shown as `23:59`. After the midnight
//!   split an end of `00:00` means "until the end of this day", not "until the
//!   start of it".
//! - The report total is shown in whole hours, truncated: 125 minutes is
//!   `"2 hours"`.
//!
//! ## Examples
//!
//! ```rust
//! use tallysheet::libs::formatter::{format_duration, format_total_hours};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(30))), "02:30");
//! assert_eq!(format_total_hours(125), "2 hours");
//! ```

use crate::libs::report::DayRecord;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

const CLOCK_FORMAT: &str = "%H:%M";
const MIDNIGHT: &str = "00:00";
const END_OF_DAY: &str = "23:59";

/// Display strings for one day of a report.
///
/// Clock values and the break are `None` for a day without entries; the
/// break is also `None` when it is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedDay {
    /// The calendar date as `YYYY-MM-DD`.
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(rename = "break")]
    pub break_time: Option<String>,
    pub duration: String,
}

/// Formats a chrono::Duration into a standardized "HH:MM" string.
///
/// Seconds are dropped and negative durations are clamped to `00:00`.
///
/// ```rust
/// use tallysheet::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(8)), "08:00");
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a number of minutes as `HH:MM`.
pub fn format_minutes(minutes: i64) -> String {
    format_duration(&Duration::minutes(minutes))
}

/// Formats the clock time of a timestamp as `HH:MM`.
pub fn format_clock(timestamp: &NaiveDateTime) -> String {
    timestamp.format(CLOCK_FORMAT).to_string()
}

/// Formats a day's end time, showing a midnight end as `23:59`.
pub fn format_end_clock(timestamp: &NaiveDateTime) -> String {
    match format_clock(timestamp) {
        clock if clock == MIDNIGHT => END_OF_DAY.to_string(),
        clock => clock,
    }
}

/// Formats a report total as whole hours, discarding leftover minutes.
pub fn format_total_hours(minutes: i64) -> String {
    format!("{} hours", minutes.div_euclid(60))
}

impl From<&DayRecord> for FormattedDay {
    fn from(day: &DayRecord) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            start_time: day.start_time.as_ref().map(format_clock),
            end_time: day.end_time.as_ref().map(format_end_clock),
            break_time: (day.break_minutes != 0).then(|| format_minutes(day.break_minutes)),
            duration: format_minutes(day.duration),
        }
    }
}
