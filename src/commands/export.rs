//! Report export command.
//!
//! Builds the same report as `tallysheet report` and writes it to a CSV,
//! JSON or Excel file.

use super::report::{build, SourceArgs};
use crate::libs::export::{ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to `tallysheet_export_<timestamp>.<ext>` in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let (_, report) = build(&args.source).await?;
    Exporter::new(args.format, args.output).export(&report)
}
