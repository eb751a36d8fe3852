//! Display implementation for tallysheet application messages.
//!
//! All user-facing text is defined here, in one `match`, so wording stays
//! consistent across commands and parameters are interpolated type-safely.
//!
//! ```rust
//! use tallysheet::libs::messages::Message;
//!
//! assert_eq!(Message::TotalDuration("2 hours".to_string()).to_string(), "Total duration: 2 hours");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::ReportHeader(start, end) => format!("Attendance report for {} - {}", start, end),
            Message::TotalDuration(duration) => format!("Total duration: {}", duration),
            Message::EntriesOutOfRange(count) => {
                format!("{} tracked interval(s) fall outside the requested dates and were left out", count)
            }
            Message::IntervalOutOfRange(start, end) => format!("Interval {} - {} is outside the report range", start, end),
            Message::DateRangeMissing => {
                "No date range given. Pass --start and --end, set START_DATE/END_DATE, or configure a default range".to_string()
            }
            Message::InvalidDate(value) => format!("'{}' is not a valid date, expected YYYY-MM-DD", value),
            Message::ReportFailed(error) => format!("Failed to generate the report: {}", error),

            // === ENTRY SOURCE MESSAGES ===
            Message::FixtureLoaded(path, count) => format!("Loaded {} entries from {}", count, path),
            Message::FixtureReadFailed(path) => format!("Failed to read time entries from {}", path),
            Message::FetchingEntries(since, until) => format!("Fetching time entries from {} to {}...", since, until),
            Message::TogglPageFetched(page, collected, total) => {
                format!("Toggl page {} fetched, {} of {} entries collected", page, collected, total)
            }
            Message::TogglEntriesFetched(count) => format!("Fetched {} time entries", count),
            Message::TogglRequestFailed(error) => format!("Toggl request failed: {}", error),
            Message::TogglNotConfigured => "Toggl is not configured. Run 'tallysheet init' or set TOGGL_TOKEN and WORKSPACE_ID".to_string(),

            // === SHEETS MESSAGES ===
            Message::SheetsNotConfigured => {
                "Google Sheets is not configured. Run 'tallysheet init' or set SPREAD_SHEET_ID and GOOGLE_ACCESS_TOKEN".to_string()
            }
            Message::SheetsNothingToWrite => "The report has no days, nothing was written to the spreadsheet".to_string(),
            Message::SheetsWriting(range) => format!("Writing report to {}...", range),
            Message::SheetsUpdated(cells, range) => format!("{} cells updated in range {}.", cells, range),
            Message::SheetsRequestFailed(error) => format!("Spreadsheet update failed: {}", error),
            Message::InvalidColumn(column) => format!("'{}' is not a valid spreadsheet column", column),
            Message::InvalidStartRow => "Spreadsheet start row must be 1 or greater".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleToggl => "Toggl settings".to_string(),
            Message::ConfigModuleSheets => "Google Sheets settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::ConfigEnvOverride(variable) => format!("Using {} from the environment", variable),
            Message::ConfigInvalidEnvValue(variable, value) => format!("Ignoring {}: '{}' is not a valid value", variable, value),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptTogglToken => "Enter your Toggl API token".to_string(),
            Message::PromptTogglWorkspace => "Enter the Toggl workspace ID".to_string(),
            Message::PromptTogglProjects => "Enter project IDs to include (comma separated, empty for all)".to_string(),
            Message::PromptTogglUserAgent => "Enter the user agent sent to Toggl (usually your email)".to_string(),
            Message::PromptTogglApiUrl => "Enter the Toggl details report URL".to_string(),
            Message::PromptSheetsSpreadsheetId => "Enter the spreadsheet ID".to_string(),
            Message::PromptSheetsTabName => "Enter the sheet (tab) name".to_string(),
            Message::PromptSheetsStartRow => "Enter the first row to write".to_string(),
            Message::PromptSheetsStartColumn => "Enter the first column to write".to_string(),
            Message::PromptSheetsAccessToken => "Enter the Google API access token".to_string(),
            Message::PromptReportStartDate => "Default report start date (YYYY-MM-DD, empty for none)".to_string(),
            Message::PromptReportEndDate => "Default report end date (YYYY-MM-DD, empty for none)".to_string(),
        };
        write!(f, "{}", text)
    }
}
