//! Spreadsheet layout of an attendance report.
//!
//! Each day becomes one row of four cells, `[date, start, end, break]`,
//! written into a rectangle whose top-left cell is configured. The
//! rectangle is as tall as the report has days and four columns wide.
//!
//! ```rust
//! use tallysheet::libs::sheet::SheetLayout;
//!
//! let layout = SheetLayout::new("Hours", "B", 3)?;
//! assert_eq!(layout.range(31), "Hours!B3:E33");
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::libs::report::ReportDay;
use crate::msg_bail_anyhow;
use anyhow::Result;

/// Cells written per day.
pub const ROW_WIDTH: u32 = 4;

/// A sheet row. `None` leaves the cell empty.
pub type SheetRow = Vec<Option<String>>;

/// Position of the report inside a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    tab_name: String,
    start_column: u32,
    start_row: u32,
}

/// Converts column letters to a 1-based index: `A` is 1, `Z` 26, `AA` 27.
pub fn column_index(letters: &str) -> Option<u32> {
    let letters = letters.trim();
    if letters.is_empty() {
        return None;
    }
    letters.chars().try_fold(0u32, |index, letter| {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let digit = letter.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        index.checked_mul(26)?.checked_add(digit)
    })
}

/// Converts a 1-based column index back to letters.
pub fn column_name(mut index: u32) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        let remainder = (index - 1) % 26;
        letters.push((b'A' + remainder as u8) as char);
        index = (index - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Quotes a tab name for A1 notation when it contains anything besides letters, digits and `_`.
fn quote_tab_name(name: &str) -> String {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

impl SheetLayout {
    /// # Errors
    ///
    /// Fails when `start_column` is not made of letters or `start_row` is zero.
    pub fn new(tab_name: &str, start_column: &str, start_row: u32) -> Result<Self> {
        let Some(start_column) = column_index(start_column) else {
            msg_bail_anyhow!(Message::InvalidColumn(start_column.to_string()));
        };
        if start_row == 0 {
            msg_bail_anyhow!(Message::InvalidStartRow);
        }
        Ok(Self {
            tab_name: tab_name.to_string(),
            start_column,
            start_row,
        })
    }

    /// Letters of the last column written.
    pub fn end_column(&self) -> String {
        column_name(self.start_column + ROW_WIDTH - 1)
    }

    /// A1 range covering `rows` rows, e.g. `Sheet1!A2:D32`.
    pub fn range(&self, rows: usize) -> String {
        let end_row = self.start_row as usize + rows.max(1) - 1;
        format!(
            "{}!{}{}:{}{}",
            quote_tab_name(&self.tab_name),
            column_name(self.start_column),
            self.start_row,
            self.end_column(),
            end_row
        )
    }
}

/// Maps report days to sheet rows.
pub fn sheet_rows(days: &[ReportDay]) -> Vec<SheetRow> {
    days.iter()
        .map(|day| {
            vec![
                Some(day.formatted.date.clone()),
                day.formatted.start_time.clone(),
                day.formatted.end_time.clone(),
                day.formatted.break_time.clone(),
            ]
        })
        .collect()
}
