/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites
/// only pick a variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    ReportHeader(String, String), // start date, end date
    TotalDuration(String),
    EntriesOutOfRange(usize),
    IntervalOutOfRange(String, String), // start, end
    DateRangeMissing,
    InvalidDate(String),
    ReportFailed(String),

    // === ENTRY SOURCE MESSAGES ===
    FixtureLoaded(String, usize), // path, entry count
    FixtureReadFailed(String),
    FetchingEntries(String, String), // since, until
    TogglPageFetched(u32, usize, usize), // page, collected, total
    TogglEntriesFetched(usize),
    TogglRequestFailed(String),
    TogglNotConfigured,

    // === SHEETS MESSAGES ===
    SheetsNotConfigured,
    SheetsNothingToWrite,
    SheetsWriting(String), // range
    SheetsUpdated(u64, String), // cells, range
    SheetsRequestFailed(String),
    InvalidColumn(String),
    InvalidStartRow,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleToggl,
    ConfigModuleSheets,
    ConfigModuleReport,
    ConfigEnvOverride(String),
    ConfigInvalidEnvValue(String, String), // variable, value

    // === PROMPTS ===
    PromptSelectModules,
    PromptTogglToken,
    PromptTogglWorkspace,
    PromptTogglProjects,
    PromptTogglUserAgent,
    PromptTogglApiUrl,
    PromptSheetsSpreadsheetId,
    PromptSheetsTabName,
    PromptSheetsStartRow,
    PromptSheetsStartColumn,
    PromptSheetsAccessToken,
    PromptReportStartDate,
    PromptReportEndDate,
}
