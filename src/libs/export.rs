//! Report export to files.
//!
//! Writes an attendance report in one of three formats:
//!
//! - **CSV**: one row per day followed by the total, for spreadsheets and scripts
//! - **JSON**: the complete report including raw day records, pretty-printed
//! - **Excel**: a formatted worksheet with a bold header row
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tallysheet::libs::export::{Exporter, ExportFormat};
//! use tallysheet::libs::report::Report;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let report = Report::generate(Vec::new(), start, start)?;
//! Exporter::new(ExportFormat::Csv, None).export(&report)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{
    libs::{messages::Message, report::Report},
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const HEADERS: [&str; 5] = ["Date", "Start", "End", "Break", "Duration"];
const TOTAL_LABEL: &str = "Total duration";

/// Supported export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Writes reports to a file in the chosen format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`.
    ///
    /// Without a path the file is named `tallysheet_export_<timestamp>.<ext>`
    /// in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("tallysheet_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, report: &Report) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(report)?,
            ExportFormat::Json => self.export_json(report)?,
            ExportFormat::Excel => self.export_excel(report)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, report: &Report) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(HEADERS)?;
        for day in &report.days {
            let formatted = &day.formatted;
            wtr.write_record([
                formatted.date.as_str(),
                formatted.start_time.as_deref().unwrap_or(""),
                formatted.end_time.as_deref().unwrap_or(""),
                formatted.break_time.as_deref().unwrap_or(""),
                formatted.duration.as_str(),
            ])?;
        }

        wtr.write_record(["", "", "", "", ""])?;
        wtr.write_record([TOTAL_LABEL, report.duration.as_str(), "", "", ""])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, report: &Report) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, report: &Report) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        let mut row = 1;
        for day in &report.days {
            let formatted = &day.formatted;
            let cells = [
                Some(&formatted.date),
                formatted.start_time.as_ref(),
                formatted.end_time.as_ref(),
                formatted.break_time.as_ref(),
                Some(&formatted.duration),
            ];
            for (col, cell) in cells.iter().enumerate() {
                if let Some(value) = cell {
                    worksheet.write_string(row, col as u16, value.as_str())?;
                }
            }
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, TOTAL_LABEL, &header_format)?;
        worksheet.write_string(row, 1, &report.duration)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
