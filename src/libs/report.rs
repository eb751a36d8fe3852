//! Attendance report generation.
//!
//! Turns tracked intervals into one [`DayRecord`] per calendar day of the
//! requested range:
//!
//! 1. Intervals are normalized (midnight split, then rounding), see
//!    [`crate::libs::interval`].
//! 2. Each normalized interval is assigned to the day of its rounded start.
//!    The day accumulates worked minutes and keeps the earliest start and the
//!    latest end. Intervals whose day lies outside the range are dropped and
//!    only counted.
//! 3. Each day with entries settles its break: the gap between span and
//!    worked minutes, raised to 10% of the worked time when a long day shows
//!    less than that, then rounded up to a multiple of 30 minutes. The worked
//!    duration becomes span minus break.
//!
//! A day that starts very early or ends very late keeps the resulting large
//! break; start and end are never moved to shrink it.

use crate::libs::error::ReportError;
use crate::libs::formatter::{format_total_hours, FormattedDay};
use crate::libs::interval::{NormalizeIntervals, RawEntry, TimeInterval};
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Days with more worked minutes than this get the minimum-break rule.
pub const MIN_BREAK_THRESHOLD: i64 = 5 * 60;

/// Breaks are reported in steps of this many minutes.
pub const BREAK_STEP: i64 = 30;

/// Aggregated attendance for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Normalized intervals whose rounded start falls on `date`.
    pub entries: Vec<TimeInterval>,
    /// Worked minutes. Sum of entry lengths until the break is settled, span minus break afterwards.
    pub duration: i64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    #[serde(rename = "break")]
    pub break_minutes: i64,
}

/// A day of the final report together with its display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDay {
    #[serde(flatten)]
    pub record: DayRecord,
    pub formatted: FormattedDay,
}

/// The result of a report-generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Total worked time as `"<hours> hours"`.
    pub duration: String,
    pub total_minutes: i64,
    /// Normalized intervals that fell outside the requested range.
    pub dropped: usize,
    pub days: Vec<ReportDay>,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            duration: 0,
            start_time: None,
            end_time: None,
            break_minutes: 0,
        }
    }

    /// Adds a normalized interval to the day.
    pub fn add(&mut self, interval: TimeInterval) {
        self.duration += interval.minutes();
        if self.start_time.map_or(true, |start| interval.start < start) {
            self.start_time = Some(interval.start);
        }
        if self.end_time.map_or(true, |end| interval.end > end) {
            self.end_time = Some(interval.end);
        }
        self.entries.push(interval);
    }

    /// Minutes between the earliest start and the latest end.
    pub fn span(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((end - start).num_minutes()),
            _ => None,
        }
    }

    /// Infers the break and recomputes the worked duration.
    ///
    /// The break never exceeds the span, so the duration stays non-negative.
    /// Returns the worked minutes the day contributes to the report total,
    /// zero for a day without entries.
    pub fn settle_break(&mut self) -> i64 {
        let Some(span) = self.span() else {
            return 0;
        };

        let raw_break = span - self.duration;
        // overlapping entries can push the minimum break past the span
        self.break_minutes = round_break(minimum_break(self.duration, raw_break)).min(span);
        self.duration = span - self.break_minutes;
        self.duration
    }
}

/// Applies the minimum-break rule.
///
/// When more than [`MIN_BREAK_THRESHOLD`] minutes were worked and the break is
/// below 10% of that, the break becomes 10% of the worked minutes (rounded up
/// to a whole minute).
pub fn minimum_break(worked: i64, raw_break: i64) -> i64 {
    if worked > MIN_BREAK_THRESHOLD && raw_break * 10 < worked {
        (worked + 9) / 10
    } else {
        raw_break
    }
}

/// Rounds a break up to the next multiple of [`BREAK_STEP`].
///
/// Overlapping entries can make the raw break negative; such breaks count as zero.
pub fn round_break(minutes: i64) -> i64 {
    let minutes = minutes.max(0);
    (minutes + BREAK_STEP - 1) / BREAK_STEP * BREAK_STEP
}

/// Creates an empty record for every date of `[start, end]`.
pub fn generate_days(start: NaiveDate, end: NaiveDate) -> Result<BTreeMap<NaiveDate, DayRecord>, ReportError> {
    if start > end {
        return Err(ReportError::InvalidRange { start, end });
    }

    Ok(start.iter_days().take_while(|date| *date <= end).map(|date| (date, DayRecord::new(date))).collect())
}

/// Assigns normalized intervals to their day and returns how many were dropped.
pub fn aggregate(days: &mut BTreeMap<NaiveDate, DayRecord>, intervals: Vec<TimeInterval>) -> usize {
    let mut dropped = 0;
    for interval in intervals {
        match days.get_mut(&interval.start.date()) {
            Some(day) => day.add(interval),
            None => {
                msg_debug!(Message::IntervalOutOfRange(interval.start.to_string(), interval.end.to_string()));
                dropped += 1;
            }
        }
    }
    dropped
}

impl Report {
    /// Builds the report for `[start, end]` from parsed intervals.
    pub fn generate(intervals: Vec<TimeInterval>, start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        let mut days = generate_days(start, end)?;
        let dropped = aggregate(&mut days, intervals.normalize());
        let total_minutes: i64 = days.values_mut().map(DayRecord::settle_break).sum();

        let days = days
            .into_values()
            .map(|record| ReportDay {
                formatted: FormattedDay::from(&record),
                record,
            })
            .collect();

        Ok(Self {
            duration: format_total_hours(total_minutes),
            total_minutes,
            dropped,
            days,
        })
    }
}

/// Validates raw entries and builds the report for `[start, end]`.
///
/// Fails on the first entry that cannot be parsed; nothing is aggregated in
/// that case.
pub fn generate_report(entries: &[RawEntry], start: NaiveDate, end: NaiveDate) -> Result<Report, ReportError> {
    let intervals = entries.iter().enumerate().map(|(index, entry)| entry.parse(index)).collect::<Result<Vec<_>, _>>()?;
    Report::generate(intervals, start, end)
}
