//! Attendance report command.
//!
//! Collects entries (Toggl or a fixture file), builds the report, prints it
//! as a table and, with `--sheet`, writes the rows to Google Sheets.

use crate::{
    api::sheets::Sheets,
    libs::{
        config::Config,
        messages::Message,
        report::{generate_report, Report},
        source,
        view::View,
    },
    msg_error_anyhow, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

/// Options shared by every command that builds a report.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// First day of the report (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<NaiveDate>,

    /// Last day of the report, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<NaiveDate>,

    /// Read time entries from a JSON file instead of Toggl
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Write the report to the configured Google spreadsheet
    #[arg(long)]
    sheet: bool,
}

/// Loads configuration and entries, then builds the report.
pub async fn build(source_args: &SourceArgs) -> Result<(Config, Report)> {
    let config = Config::read()?.apply_env();
    let entries = source::collect(source_args.input.as_deref(), source_args.start, source_args.end, &config).await?;

    let report = generate_report(&entries.entries, entries.range.start, entries.range.end)
        .map_err(|e| msg_error_anyhow!(Message::ReportFailed(e.to_string())))?;
    if report.dropped > 0 {
        msg_warning!(Message::EntriesOutOfRange(report.dropped));
    }

    msg_print!(Message::ReportHeader(entries.range.start.to_string(), entries.range.end.to_string()), true);
    Ok((config, report))
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let (config, report) = build(&args.source).await?;
    View::report(&report)?;

    if args.sheet {
        let sheets = config.sheets.as_ref().ok_or_else(|| msg_error_anyhow!(Message::SheetsNotConfigured))?;
        Sheets::new(sheets).write_days(&report.days).await?;
    }

    Ok(())
}
