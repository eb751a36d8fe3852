//! Typed errors raised by the report-generation core.
//!
//! The core never returns a partially built report: every failure is
//! detected while parsing or validating input and surfaces as one of the
//! variants below before any day record is touched.

use chrono::NaiveDate;
use thiserror::Error;

/// Reason an input interval was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInterval {
    /// The start timestamp is absent.
    MissingStart,
    /// The end timestamp is absent (e.g. a timer that is still running).
    MissingEnd,
    /// A timestamp could not be parsed.
    Malformed(String),
    /// The end lies before the start.
    EndBeforeStart,
}

impl std::fmt::Display for InvalidInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInterval::MissingStart => write!(f, "start timestamp is missing"),
            InvalidInterval::MissingEnd => write!(f, "end timestamp is missing"),
            InvalidInterval::Malformed(value) => write!(f, "'{}' is not a valid timestamp", value),
            InvalidInterval::EndBeforeStart => write!(f, "end is before start"),
        }
    }
}

/// An input interval that cannot be normalized.
///
/// Carries the position of the interval in the input list together with
/// its raw values so the offending entry can be located in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid interval #{index} (start: {}, end: {}): {reason}", .start.as_deref().unwrap_or("-"), .end.as_deref().unwrap_or("-"))]
pub struct ValidationError {
    /// Zero-based index of the entry in the input list.
    pub index: usize,
    pub start: Option<String>,
    pub end: Option<String>,
    pub reason: InvalidInterval,
}

/// Failure of a report-generation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
