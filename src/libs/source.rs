//! Where report input comes from.
//!
//! Entries are either fetched from Toggl or read from a JSON fixture file
//! of the form:
//!
//! ```json
//! {
//!   "start": "2024-01-01",
//!   "end": "2024-01-31",
//!   "data": [{ "start": "2024-01-02T09:05:00+01:00", "end": "2024-01-02T12:40:00+01:00" }]
//! }
//! ```
//!
//! The report range is resolved bound by bound: command line first, then
//! the fixture's own dates, then the configured defaults (which include
//! `START_DATE` / `END_DATE` from the environment).

use crate::api::toggl::Toggl;
use crate::libs::config::{Config, ReportConfig};
use crate::libs::interval::RawEntry;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Time entries stored in a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    pub data: Vec<RawEntry>,
}

/// Inclusive range of report dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Entries to report on, with the range they were collected for.
#[derive(Debug, Clone)]
pub struct Entries {
    pub range: DateRange,
    pub entries: Vec<RawEntry>,
}

impl Fixture {
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| Message::FixtureReadFailed(path.display().to_string()))?;
        let fixture = serde_json::from_str(&content).with_context(|| Message::FixtureReadFailed(path.display().to_string()))?;
        Ok(fixture)
    }
}

/// Picks each bound from the first source that has it.
pub fn resolve_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    fixture: Option<&Fixture>,
    defaults: Option<&ReportConfig>,
) -> Option<DateRange> {
    let start = start
        .or_else(|| fixture.and_then(|fixture| fixture.start))
        .or_else(|| defaults.and_then(|defaults| defaults.start_date))?;
    let end = end
        .or_else(|| fixture.and_then(|fixture| fixture.end))
        .or_else(|| defaults.and_then(|defaults| defaults.end_date))?;
    Some(DateRange { start, end })
}

/// Loads entries from `input` when given, from Toggl otherwise.
///
/// # Errors
///
/// Fails when no complete date range can be resolved, when the fixture
/// cannot be read, when Toggl is not configured or when fetching fails.
pub async fn collect(input: Option<&Path>, start: Option<NaiveDate>, end: Option<NaiveDate>, config: &Config) -> Result<Entries> {
    match input {
        Some(path) => {
            let fixture = Fixture::read(path)?;
            let range = resolve_range(start, end, Some(&fixture), config.report.as_ref())
                .ok_or_else(|| msg_error_anyhow!(Message::DateRangeMissing))?;
            msg_info!(Message::FixtureLoaded(path.display().to_string(), fixture.data.len()));
            Ok(Entries {
                range,
                entries: fixture.data,
            })
        }
        None => {
            let range = resolve_range(start, end, None, config.report.as_ref()).ok_or_else(|| msg_error_anyhow!(Message::DateRangeMissing))?;
            let toggl = config.toggl.as_ref().ok_or_else(|| msg_error_anyhow!(Message::TogglNotConfigured))?;

            msg_info!(Message::FetchingEntries(range.start.to_string(), range.end.to_string()));
            let entries = Toggl::new(toggl).get_entries(range.start, range.end).await?;
            msg_info!(Message::TogglEntriesFetched(entries.len()));
            Ok(Entries { range, entries })
        }
    }
}
