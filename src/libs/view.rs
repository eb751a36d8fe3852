use super::report::Report;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

const EMPTY_CELL: &str = "-";

pub struct View {}

impl View {
    /// Prints the days of a report as a table followed by the total.
    pub fn report(report: &Report) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "START", "END", "BREAK", "DURATION"]);
        for day in &report.days {
            let formatted = &day.formatted;
            table.add_row(row![
                formatted.date,
                formatted.start_time.as_deref().unwrap_or(EMPTY_CELL),
                formatted.end_time.as_deref().unwrap_or(EMPTY_CELL),
                formatted.break_time.as_deref().unwrap_or(EMPTY_CELL),
                formatted.duration
            ]);
        }
        table.printstd();

        msg_print!(Message::TotalDuration(report.duration.clone()), true);
        Ok(())
    }
}
